use super::Workbench;
use std::sync::mpsc::{RecvTimeoutError, TryRecvError};
use std::time::Duration;

impl Workbench {
    /// Drains pending background results and log lines (called from the main loop).
    pub fn tick(&mut self) -> bool {
        let mut changed = false;
        changed |= self.poll_messages();
        changed |= self.poll_logs();
        changed
    }

    /// Blocks up to `timeout` for the next background message, then drains the rest.
    pub fn wait_and_tick(&mut self, timeout: Duration) -> bool {
        match self.rx.recv_timeout(timeout) {
            Ok(msg) => {
                let mut changed = self.dispatch_kernel(msg.into_action());
                changed |= self.tick();
                changed
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => self.tick(),
        }
    }

    fn poll_messages(&mut self) -> bool {
        let mut changed = false;
        for _ in 0..super::MAX_MESSAGE_DRAIN_PER_TICK {
            match self.rx.try_recv() {
                Ok(msg) => changed |= self.dispatch_kernel(msg.into_action()),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        changed
    }

    fn poll_logs(&mut self) -> bool {
        let Some(rx) = self.log_rx.as_ref() else {
            return false;
        };

        let mut changed = false;
        for _ in 0..super::MAX_LOG_DRAIN_PER_TICK {
            match rx.try_recv() {
                Ok(line) => {
                    if self.logs.len() == super::LOG_BUFFER_CAP {
                        self.logs.pop_front();
                    }
                    self.logs.push_back(line);
                    changed = true;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.log_rx = None;
                    break;
                }
            }
        }
        changed
    }
}
