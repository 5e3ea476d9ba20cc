use crate::prediction::{self, PredictError, PredictionRequest, PredictionResponse};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
        mpsc::{Receiver, Sender},
    },
    thread,
};

type TryRecvError = std::sync::mpsc::TryRecvError;

pub(crate) enum JobMessage {
    PredictionFinished(PredictionJobResult),
}

#[derive(Debug)]
pub(crate) struct PredictionJob {
    pub(crate) endpoint: String,
    pub(crate) request: PredictionRequest,
}

#[derive(Debug)]
pub(crate) struct PredictionJobResult {
    pub(crate) request_id: u64,
    pub(crate) result: Result<PredictionResponse, PredictError>,
}

struct InFlight {
    request_id: u64,
    cancel: Arc<AtomicBool>,
}

/// Background prediction requests and the channel their results come back on.
pub(crate) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    next_request_id: u64,
    in_flight: Option<InFlight>,
    repaint: Option<egui::Context>,
}

impl ControllerJobs {
    pub(super) fn new() -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel::<JobMessage>();
        Self {
            message_tx,
            message_rx,
            next_request_id: 1,
            in_flight: None,
            repaint: None,
        }
    }

    /// Wake the UI when a result lands instead of waiting for the next input event.
    pub(super) fn set_repaint_context(&mut self, ctx: egui::Context) {
        self.repaint = Some(ctx);
    }

    pub(super) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    pub(super) fn prediction_in_progress(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Spawn the request on a worker thread and return its id.
    pub(super) fn begin_prediction(&mut self, agent: ureq::Agent, job: PredictionJob) -> u64 {
        self.cancel_in_flight();
        let request_id = self.next_request_id;
        self.next_request_id = self.next_request_id.wrapping_add(1).max(1);
        let cancel = Arc::new(AtomicBool::new(false));
        self.in_flight = Some(InFlight {
            request_id,
            cancel: cancel.clone(),
        });
        let tx = self.message_tx.clone();
        let repaint = self.repaint.clone();
        thread::spawn(move || {
            let result = prediction::predict(&agent, &job.endpoint, &job.request);
            if cancel.load(Ordering::Relaxed) {
                tracing::debug!(request_id, "Dropping result of cancelled prediction");
                return;
            }
            let _ = tx.send(JobMessage::PredictionFinished(PredictionJobResult {
                request_id,
                result,
            }));
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });
        request_id
    }

    /// Clear the in-flight marker if `request_id` is the current request.
    ///
    /// Returns false for results of requests that were cancelled or replaced.
    pub(super) fn finish_prediction(&mut self, request_id: u64) -> bool {
        match &self.in_flight {
            Some(in_flight) if in_flight.request_id == request_id => {
                self.in_flight = None;
                true
            }
            _ => false,
        }
    }

    /// Flag the current request as cancelled. Returns false if none was running.
    pub(super) fn cancel_in_flight(&mut self) -> bool {
        let Some(in_flight) = self.in_flight.take() else {
            return false;
        };
        in_flight.cancel.store(true, Ordering::Relaxed);
        tracing::debug!(request_id = in_flight.request_id, "Prediction cancelled");
        true
    }
}

impl Drop for ControllerJobs {
    fn drop(&mut self) {
        self.cancel_in_flight();
    }
}
