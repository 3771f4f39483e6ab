use crate::logger;
use crate::models::{FetchRequest, FetchResponse};
use crate::trivia::{normalize_questions, QuestionSource};
use crossbeam_channel::{Receiver, Sender};
use rand::Rng;
use std::thread;

/// Fetches, decodes and shuffles one question set.
pub async fn fetch_question_set<S, R>(source: &S, request: &FetchRequest, rng: &mut R) -> FetchResponse
where
    S: QuestionSource + ?Sized,
    R: Rng + ?Sized,
{
    let result = source
        .fetch_questions(&request.params)
        .await
        .map(|raw| normalize_questions(raw, rng));

    FetchResponse {
        generation: request.generation,
        result,
    }
}

/// Serves fetch requests one at a time until the request channel closes.
/// Requests are never cancelled; the session drops answers it no longer
/// wants.
pub fn spawn_fetch_worker<S>(
    source: S,
    response_tx: Sender<FetchResponse>,
    request_rx: Receiver<FetchRequest>,
) -> thread::JoinHandle<()>
where
    S: QuestionSource + 'static,
{
    thread::Builder::new()
        .name("trivia-quiz::fetch_worker".to_string())
        .spawn(move || {
            let rt = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    logger::log(&format!("Failed to start fetch runtime: {}", e));
                    return;
                }
            };

            while let Ok(request) = request_rx.recv() {
                logger::log(&format!(
                    "Worker received request for generation {}",
                    request.generation
                ));

                let response = rt.block_on(async {
                    let mut rng = rand::thread_rng();
                    fetch_question_set(&source, &request, &mut rng).await
                });

                if let Err(e) = &response.result {
                    logger::log(&format!("Worker fetch error: {}", e));
                }

                if response_tx.send(response).is_err() {
                    break;
                }
            }

            logger::log("Worker channel disconnected, exiting");
        })
        .expect("Failed to spawn fetch worker thread")
}
