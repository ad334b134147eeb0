//! Session command: interactive logging over stdin.

use std::io::{IsTerminal, Write, stdin, stdout};

use anyhow::Result;
use nt_core::UserProfile;

use crate::config::ExportConfig;
use crate::render;
use crate::session::{self, Session};

pub fn run(profile: UserProfile, export: ExportConfig) -> Result<()> {
    let input = stdin();
    let interactive = input.is_terminal();
    let out = stdout();
    let mut out = out.lock();

    if interactive {
        render::write_profile(&mut out, &profile)?;
        writeln!(out, "Type `help` for a list of requests.")?;
    }

    let mut session = Session::new(profile, export);
    session::run(&mut session, input.lock(), &mut out, interactive)
}
