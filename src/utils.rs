use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Greedy word wrap to `max_width` terminal columns. Words wider than a
/// line are split at the column limit. Always yields at least one line.
pub fn wrap_to_width(s: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut used = 0;

    for word in s.split_whitespace() {
        let word_width = word.width();
        let gap = usize::from(!current.is_empty());

        if used + gap + word_width <= max_width {
            if gap == 1 {
                current.push(' ');
            }
            current.push_str(word);
            used += gap + word_width;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            used = 0;
        }
        if word_width <= max_width {
            current.push_str(word);
            used = word_width;
            continue;
        }

        for ch in word.chars() {
            let w = ch.width().unwrap_or(0);
            if used + w > max_width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                used = 0;
            }
            current.push(ch);
            used += w;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Scroll offset that keeps the block `[first_line, first_line + height)`
/// inside a viewport of `visible` lines, moving as little as possible.
pub fn scroll_to_show(current: usize, first_line: usize, height: usize, visible: usize) -> usize {
    if visible == 0 {
        return first_line;
    }
    if first_line < current {
        first_line
    } else if first_line + height > current + visible {
        (first_line + height).saturating_sub(visible)
    } else {
        current
    }
}
