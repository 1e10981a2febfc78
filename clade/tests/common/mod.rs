#![allow(dead_code)]

use clade::{Application, CladeError};
use std::io;

// ============================================================================
// Test Context
// ============================================================================

#[derive(Debug, Default)]
pub struct Workshop {
    pub built: Vec<String>,
    pub deploys: usize,
}

impl Workshop {
    pub fn build(&mut self, what: &str) {
        self.built.push(what.to_string());
    }
}

// ============================================================================
// Fixtures
// ============================================================================

/// An application with a small command tree:
///
/// - `factory example`
/// - `factory widget large`
/// - `deploy`
/// - `broken` (always fails)
pub fn workshop_app() -> Application<Workshop> {
    let mut app = Application::new(Workshop::default());
    add_workshop_commands(&mut app).expect("fixture commands register");
    app
}

pub fn add_workshop_commands(app: &mut Application<Workshop>) -> Result<(), CladeError> {
    app.add_command("factoryExample", |w: &mut Workshop| w.build("example"))?;
    app.add_command("factory widget large", |w: &mut Workshop| {
        w.build("large widget")
    })?;
    app.add_command("deploy", |w: &mut Workshop| w.deploys += 1)?;
    app.add_command("broken", |_: &mut Workshop| -> io::Result<()> {
        Err(io::Error::other("deploy target unreachable"))
    })?;
    Ok(())
}
