//! # Operator Console
//!
//! The read-evaluate-print loop: menu rendering, prompt parsing, and
//! narration of warehouse operations. All state lives in the core
//! `Warehouse`; this module only translates between the operator and the
//! engine. Recoverable errors print and return to the menu; a collapse
//! drains out of the loop and ends the run with the catastrophe banner.

use qvault_core::{ControlState, MenuSelection, ObjectId, QvaultError, RandomSource, Warehouse};
use std::io::{self, BufRead, Write};

/// The interactive console session.
pub struct Console {
    warehouse: Warehouse,
    rng: Box<dyn RandomSource>,
    json_mode: bool,
}

impl Console {
    /// Create a console over a fresh, empty warehouse.
    #[must_use]
    pub fn new(rng: Box<dyn RandomSource>, json_mode: bool) -> Self {
        Self {
            warehouse: Warehouse::new(),
            rng,
            json_mode,
        }
    }

    /// Run the operator loop until exit or collapse.
    ///
    /// # Errors
    ///
    /// Only console I/O failures surface as errors; domain errors are
    /// rendered and absorbed by the loop. End-of-input on stdin counts as
    /// an exit request.
    pub fn run(&mut self) -> io::Result<ControlState> {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut state = ControlState::Running;

        while state.is_running() {
            print_menu();
            let Some(line) = prompt_line(&mut input, "Your selection: ")? else {
                state = ControlState::TerminatedNormal;
                break;
            };

            match MenuSelection::parse(&line) {
                Ok(MenuSelection::AddObject) => self.handle_add(),
                Ok(MenuSelection::ListInventory) => self.handle_list(),
                Ok(MenuSelection::AnalyzeObject) => {
                    state = self.handle_analyze(&mut input)?;
                }
                Ok(MenuSelection::EmergencyCooling) => {
                    state = self.handle_cooling(&mut input)?;
                }
                Ok(MenuSelection::Exit) => state = ControlState::TerminatedNormal,
                Err(err) => println!("\n{err}"),
            }
        }

        match &state {
            ControlState::TerminatedNormal => println!("\nShift is over. Goodbye!"),
            ControlState::TerminatedCollapse(id) => print!("{}", collapse_banner(id)),
            ControlState::Running => {}
        }
        Ok(state)
    }

    fn handle_add(&mut self) {
        let report = self.warehouse.add_random(self.rng.as_mut());
        tracing::info!(id = %report.id, kind = report.kind.name(), stability = report.stability, "object spawned");
        println!(
            "\nNew {} added: {} (Stability: {:.1}%)",
            report.kind.name(),
            report.id,
            report.stability
        );
    }

    fn handle_list(&self) {
        let inventory = self.warehouse.inventory();
        if inventory.is_empty() {
            println!("\nInventory is empty. No objects added yet.");
            return;
        }

        if self.json_mode {
            match serde_json::to_string_pretty(inventory.objects()) {
                Ok(json) => println!("{json}"),
                Err(err) => tracing::error!("Cannot render inventory as JSON: {err}"),
            }
            return;
        }

        println!("\n╔══════════════════════════════════════════════════════════╗");
        println!("║                    INVENTORY REPORT                      ║");
        println!("╚══════════════════════════════════════════════════════════╝");
        for line in inventory.status_reports() {
            println!("{line}");
        }
    }

    fn handle_analyze(&mut self, input: &mut impl BufRead) -> io::Result<ControlState> {
        if self.warehouse.inventory().is_empty() {
            println!("\nInventory is empty. No objects to analyze.");
            return Ok(ControlState::Running);
        }

        let Some(id) = prompt_line(input, "\nEnter the id of the object to analyze: ")? else {
            return Ok(ControlState::TerminatedNormal);
        };

        println!("\nAnalyzing {id}...");
        match self.warehouse.analyze(&id) {
            Ok(outcome) => {
                println!("{}", outcome.narration);
                println!("Analysis complete. New stability: {:.1}%", outcome.stability);
                Ok(ControlState::Running)
            }
            Err(err) => {
                // A fatal analysis still narrates before the banner.
                if let QvaultError::Collapse { narration, .. } = &err {
                    println!("{narration}");
                    tracing::error!("{err}");
                } else {
                    println!("\n{err}");
                }
                Ok(ControlState::Running.after_error(&err))
            }
        }
    }

    fn handle_cooling(&mut self, input: &mut impl BufRead) -> io::Result<ControlState> {
        if self.warehouse.inventory().is_empty() {
            println!("\nInventory is empty. No objects to cool.");
            return Ok(ControlState::Running);
        }

        let Some(id) = prompt_line(input, "\nEnter the id of the object to cool: ")? else {
            return Ok(ControlState::TerminatedNormal);
        };

        match self.warehouse.cool(&id) {
            Ok(report) => {
                tracing::info!(id = %report.id, stability = report.stability, "emergency cooling applied");
                println!(
                    "\n[{}] {} New stability: {:.1}%",
                    report.id, report.narration, report.stability
                );
            }
            Err(err) => println!("\n{err}"),
        }
        Ok(ControlState::Running)
    }
}

/// Render the operator menu.
fn print_menu() {
    println!("\n════════════════════════════════════════");
    println!("      QUANTUM VAULT CONTROL PANEL");
    println!("════════════════════════════════════════");
    println!("1. Add New Object");
    println!("2. List Inventory (Status Report)");
    println!("3. Analyze Object");
    println!("4. Apply Emergency Cooling");
    println!("5. Exit");
    println!("════════════════════════════════════════");
}

/// Print a prompt, then read one trimmed line. `None` means end of input.
fn prompt_line(input: &mut impl BufRead, prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Catastrophe banner printed when a collapse ends the run.
fn collapse_banner(id: &ObjectId) -> String {
    format!(
        "\n╔══════════════════════════════════════════════════════════╗\n\
         ║        SYSTEM FAILURE! EVACUATION IN PROGRESS...         ║\n\
         ╚══════════════════════════════════════════════════════════╝\n\
         \nQUANTUM COLLAPSE! Object {id} detonated\n\n[GAME OVER]\n"
    )
}

// =============================================================================
// TESTS
// =============================================================================
