use component_sweeper::app::{self, RunResult};
use component_sweeper::console::{self, Console, StdConsole};
use component_sweeper::domain::{CleanupOutcome, KeyStatus};
use component_sweeper::repositories::{elevation, power};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let mut console = StdConsole;

    if !elevation::is_elevated() {
        console.say("Administrator privileges are required to modify the registry.");
        console.say("Requesting administrator privileges...");
        if let Err(e) = elevation::relaunch_elevated() {
            eprintln!("Error: {e}");
            console.pause("\nPress Enter to exit...");
        }
        // The elevated instance takes over either way.
        return;
    }

    match app::run(&mut console) {
        Ok(RunResult::Cancelled) => {
            console.say("Operation cancelled.");
        }
        Ok(RunResult::Completed { backup, outcome }) => {
            summarize(&mut console, &outcome);
            console.say(&format!("Registry backup location: {}", backup.path.display()));
            console.say("\nIf problems appear, double-click the backup file to restore the registry.");
            offer_restart(&mut console);
        }
        Err(e) => {
            eprintln!("\nError: {e}");
        }
    }

    console.pause("\nPress Enter to exit...");
}

fn summarize(console: &mut dyn Console, outcome: &CleanupOutcome) {
    console.say("\nDone!");
    console.say(&format!("Removed: {} entries", outcome.removed()));
    if outcome.failed() > 0 {
        console.say(&format!("Failed: {} entries", outcome.failed()));
        for attempt in &outcome.attempts {
            if let KeyStatus::Failed { reason } = &attempt.status {
                console.say(&format!("  {}: {}", attempt.key, reason));
            }
        }
    }
}

fn offer_restart(console: &mut dyn Console) {
    let wants_restart = console.confirm(
        "\nA restart is recommended to apply the changes. Restart now? Type 'yes' to restart: ",
    );
    if !wants_restart {
        console.say("Remember to restart the system manually later.");
        return;
    }

    console.say("The system will restart in 5 seconds...");
    console::countdown(console, 5);
    if let Err(e) = power::restart_now() {
        eprintln!("Error: {e}");
    }
}
