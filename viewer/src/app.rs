//! The viewer's run loop, independent of the real stdin and stdout.
//!
//! Every state change is rendered to `out`. Input lines trigger fetches:
//! Enter (or `f`) fetches, `q` quits. On end of input the loop waits for the
//! fetches it started, so a piped run still shows the final result; on `q`
//! outstanding fetches are aborted. Either way the controller is dropped
//! last, which closes the watch channel and lets the render task print the
//! final state and return `out`.

use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result};
use films_core::{render, FetchController, FetchState, FilmsClient, Lifecycle, Transport};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::JoinHandle;

use crate::config::Config;

pub async fn run<T, R, W>(config: &Config, transport: T, input: R, mut out: W) -> Result<W>
where
    T: Transport + 'static,
    R: AsyncBufRead + Unpin,
    W: Write + Send + 'static,
{
    let controller = Arc::new(FetchController::new(
        FilmsClient::new(&config.api_url),
        transport,
        config.lifecycle,
    ));

    let mut updates = controller.subscribe();
    let view: JoinHandle<std::io::Result<W>> = tokio::spawn(async move {
        let mut shown = updates.borrow_and_update().clone();
        writeln!(out, "{}", render(&shown))?;
        while updates.changed().await.is_ok() {
            shown = updates.borrow_and_update().clone();
            writeln!(out, "\n{}", render(&shown))?;
        }
        let last: FetchState = updates.borrow().clone();
        if last != shown {
            writeln!(out, "\n{}", render(&last))?;
        }
        out.flush()?;
        Ok(out)
    });

    let mut fetches = Vec::new();
    if controller.lifecycle() == Lifecycle::FetchOnMount {
        let c = Arc::clone(&controller);
        fetches.push(tokio::spawn(async move {
            c.mount().await;
        }));
    }

    let mut quit = false;
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "q" | "quit" => {
                quit = true;
                break;
            }
            "" | "f" | "fetch" => {
                let c = Arc::clone(&controller);
                fetches.push(tokio::spawn(async move {
                    c.fetch().await;
                }));
            }
            other => tracing::warn!(command = other, "unknown command: Enter fetches, q quits"),
        }
    }

    for fetch in fetches {
        if quit {
            fetch.abort();
        }
        // Cancelled fetches are expected after `q`; both paths release the
        // task's controller handle.
        if let Err(error) = fetch.await {
            if !error.is_cancelled() {
                tracing::warn!(%error, "fetch task failed");
            }
        }
    }
    drop(controller);

    let out = view.await.context("render task failed")??;
    Ok(out)
}
