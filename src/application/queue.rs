/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! In-process task queue
//!
//! Tasks are sent over a bounded channel to a fixed pool of workers. Each
//! submission gets an id and a [`TaskHandle`]; awaiting the handle yields the
//! result, dropping it makes the submission fire-and-forget. A chained task runs
//! entirely inside one worker, so its stages stay ordered.

use crate::application::config::TaskQueueConfig;
use crate::application::task::{Executable, Task};
use crate::error::AppError;
use crate::model::http::RequestExecutor;
use crate::utils::id::task_id;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Result of one finished task
#[derive(Debug)]
pub struct TaskOutcome {
    /// Id assigned at submission
    pub id: String,
    /// Task name
    pub name: &'static str,
    /// When the task entered the queue
    pub submitted_at: DateTime<Utc>,
    /// When the worker finished it
    pub completed_at: DateTime<Utc>,
    /// Response envelope or error
    pub result: Result<Value, AppError>,
}

struct Job {
    id: String,
    task: Task,
    submitted_at: DateTime<Utc>,
    reply: oneshot::Sender<TaskOutcome>,
}

/// Handle to a submitted task
#[derive(Debug)]
pub struct TaskHandle {
    id: String,
    name: &'static str,
    rx: oneshot::Receiver<TaskOutcome>,
}

impl TaskHandle {
    /// Id assigned at submission
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Task name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Waits for the task and returns the full outcome
    ///
    /// # Errors
    /// [`AppError::QueueClosed`] if the worker went away without replying.
    pub async fn outcome(self) -> Result<TaskOutcome, AppError> {
        self.rx.await.map_err(|_| AppError::QueueClosed)
    }

    /// Waits for the task and returns its result
    pub async fn wait(self) -> Result<Value, AppError> {
        self.outcome().await?.result
    }
}

/// Worker pool fed by a bounded channel
pub struct TaskQueue {
    name: String,
    tx: Option<mpsc::Sender<Job>>,
    workers: Vec<JoinHandle<()>>,
}

impl TaskQueue {
    /// Starts the workers. Must be called from within a Tokio runtime.
    pub fn start(config: &TaskQueueConfig, executor: Arc<dyn RequestExecutor>) -> Self {
        let (tx, rx) = mpsc::channel::<Job>(config.capacity.max(1));
        let rx = Arc::new(Mutex::new(rx));

        let workers = (0..config.workers.max(1))
            .map(|worker| {
                let rx = rx.clone();
                let executor = executor.clone();
                let queue = config.name.clone();
                tokio::spawn(async move { run_worker(queue, worker, rx, executor).await })
            })
            .collect::<Vec<_>>();

        info!(
            "Task queue '{}' started with {} workers",
            config.name,
            workers.len()
        );

        Self {
            name: config.name.clone(),
            tx: Some(tx),
            workers,
        }
    }

    /// Queue name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the queue still accepts tasks
    pub fn is_open(&self) -> bool {
        self.tx.as_ref().is_some_and(|tx| !tx.is_closed())
    }

    /// Enqueues a task, waiting for room when the queue is full
    ///
    /// # Errors
    /// [`AppError::QueueClosed`] after [`shutdown`](Self::shutdown).
    pub async fn submit(&self, task: Task) -> Result<TaskHandle, AppError> {
        let tx = self.tx.as_ref().ok_or(AppError::QueueClosed)?;
        let (reply, rx) = oneshot::channel();
        let id = task_id();
        let name = task.name();

        let job = Job {
            id: id.clone(),
            task,
            submitted_at: Utc::now(),
            reply,
        };
        tx.send(job).await.map_err(|_| AppError::QueueClosed)?;
        debug!("Queued task {} [{}] on '{}'", name, id, self.name);

        Ok(TaskHandle { id, name, rx })
    }

    /// Stops accepting tasks, lets workers drain what is queued and joins them
    pub async fn shutdown(&mut self) {
        self.tx.take();
        for worker in self.workers.drain(..) {
            if let Err(e) = worker.await {
                warn!("Worker of queue '{}' ended abnormally: {}", self.name, e);
            }
        }
        info!("Task queue '{}' stopped", self.name);
    }
}

async fn run_worker(
    queue: String,
    worker: usize,
    rx: Arc<Mutex<mpsc::Receiver<Job>>>,
    executor: Arc<dyn RequestExecutor>,
) {
    loop {
        let job = { rx.lock().await.recv().await };
        let Some(job) = job else {
            break;
        };

        let name = job.task.name();
        debug!("Worker {worker} of '{queue}' running {name} [{}]", job.id);
        let result = job.task.execute(executor.as_ref()).await;
        match &result {
            Ok(_) => info!("Task {}[{}] succeeded", name, job.id),
            Err(e) => warn!("Task {}[{}] failed: {}", name, job.id, e),
        }

        let outcome = TaskOutcome {
            id: job.id,
            name,
            submitted_at: job.submitted_at,
            completed_at: Utc::now(),
            result,
        };
        if job.reply.send(outcome).is_err() {
            debug!("Result of {name} discarded, handle was dropped");
        }
    }
    debug!("Worker {worker} of '{queue}' exiting");
}
