//! Firmware updates through `fwupdmgr`.
//!
//! `fwupdmgr get-updates` exits non-zero when nothing is pending, which is
//! what gates the actual `update`.

use super::{Backend, Session};
use crate::output::Severity;

pub struct FwupdBackend;

impl Backend for FwupdBackend {
    fn name(&self) -> &'static str {
        "fwupd"
    }

    fn binary(&self) -> &'static str {
        "fwupdmgr"
    }

    fn section(&self) -> &'static str {
        "Updating system firmware with fwupd..."
    }

    fn update(&self, session: &Session<'_>) {
        if session.exec(&["fwupdmgr", "refresh"]) == 0
            && session.exec(&["fwupdmgr", "get-updates"]) == 0
        {
            session.exec(&["fwupdmgr", "update"]);
        }
        session.log(
            "Firmware updates may require a restart. Read the above logs for more information.",
            Severity::Info,
        );
    }
}
