//! AlsoNotify CLI - inspect workflow rules, the active timer and cached settings

use alsonotify::cli::commands::{cta, route, settings, tab, timer, transitions, turn};
use alsonotify::cli::{Cli, Commands, CtaTarget, SettingsTarget, TimerAction};
use alsonotify::errors::to_exit_code;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let cli = Cli::parse();

    // Flags win over RUST_LOG
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else if cli.quiet {
        EnvFilter::new("warn")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(to_exit_code(&e));
        }
    }
}

fn run(cli: Cli) -> alsonotify::Result<()> {
    let cwd = cli.cwd.as_deref();
    match cli.command {
        Some(Commands::Transitions {
            from,
            to,
            role,
            task,
            json,
        }) => transitions::run(cwd, &from, to.as_deref(), &role, task, json),
        Some(Commands::Cta { target }) => match target {
            CtaTarget::Requirement {
                status,
                role,
                requirement_type,
                mapped,
                rejected_by_sender,
                quoted,
                json,
            } => {
                let flags = cta::RequirementFlags {
                    role,
                    requirement_type,
                    mapped,
                    rejected_by_sender,
                    quoted,
                };
                cta::run_requirement(cwd, &status, flags, json)
            }
            CtaTarget::Task {
                status,
                leader,
                member,
                current_turn,
                sequential,
                json,
            } => cta::run_task(cwd, &status, cta::task_context(leader, member, current_turn, sequential), json),
        },
        Some(Commands::Turn { task, user, json }) => turn::run(cwd, &task, user, json),
        Some(Commands::Timer { action }) => match action {
            TimerAction::Show { json } => timer::show(cwd, json),
            TimerAction::Start {
                task_id,
                task_name,
                worklog,
            } => timer::start(cwd, task_id, &task_name, worklog),
            TimerAction::Pause => timer::pause(cwd),
            TimerAction::Resume { worklog } => timer::resume(cwd, worklog),
            TimerAction::Stop => timer::stop(cwd),
        },
        Some(Commands::Tab {
            url,
            tab: tab_name,
            default,
            valid,
        }) => tab::run(cwd, &url, tab_name.as_deref(), &default, &valid),
        Some(Commands::Route { path, cookie, json }) => route::run(cwd, &path, &cookie, json),
        Some(Commands::Settings { target }) => match target {
            SettingsTarget::Documents { reset, json } => settings::documents(cwd, reset, json),
            SettingsTarget::Presets { add, delete, json } => {
                settings::presets(cwd, add.as_deref(), delete.as_deref(), json)
            }
        },
        None => {
            // Default to showing help - clap handles this
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
