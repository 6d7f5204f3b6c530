use super::ports::surface::ScriptRequest;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

#[derive(Debug)]
pub enum KernelMessage {
    /// A script issued through `RenderSurface::run_script` has completed.
    ScriptResult {
        request: ScriptRequest,
        result: String,
    },
}

#[derive(Clone)]
pub struct KernelBusSender {
    tx: Sender<KernelMessage>,
}

pub struct KernelBusReceiver {
    rx: Receiver<KernelMessage>,
}

pub fn kernel_bus() -> (KernelBusSender, KernelBusReceiver) {
    let (tx, rx) = mpsc::channel();
    (KernelBusSender { tx }, KernelBusReceiver { rx })
}

impl KernelBusSender {
    pub fn send(&self, msg: KernelMessage) -> Result<(), mpsc::SendError<KernelMessage>> {
        self.tx.send(msg)
    }
}

impl KernelBusReceiver {
    pub fn try_recv(&mut self) -> Result<KernelMessage, TryRecvError> {
        self.rx.try_recv()
    }
}
