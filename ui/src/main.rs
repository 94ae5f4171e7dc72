use clap::Parser;
use std::path::PathBuf;
use swatchy::app::model::Model;
use swatchy::cli::Cli;
use swatchy::components::common::ComponentId;
use swatchy::{config, logger};
use swatchy_core::store;
use tuirealm::application::PollStrategy;
use tuirealm::{AttrValue, Attribute, Update};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::setup_logger()?;

    let state_path = resolve_state_path(&cli)?;
    log::info!("selection state file: {}", state_path.display());

    let mut model = Model::new(&state_path)?;

    // startup overrides act exactly like pressing the matching button
    if cli.reset {
        model.controller.set_theme(None)?;
    } else if let Some(theme) = cli.theme.as_deref() {
        model.controller.set_theme(Some(theme))?;
    }
    if cli.reset || cli.theme.is_some() {
        model.drain_bus();
        model.remount_switcher()?;
        model.remount_status_label()?;
        // the write above also woke our own watcher
        model.watcher.has_changed();
    }

    let _ = model.terminal.enter_alternate_screen();
    let _ = model.terminal.enable_raw_mode();

    // Main loop
    while !model.quit {
        // Changes written by other running instances
        if let Some(msg) = model.poll_external_change() {
            let mut msg = Some(msg);
            while msg.is_some() {
                msg = model.update(msg);
            }
        }

        // Tick
        match model.app.tick(PollStrategy::Once) {
            Err(err) => {
                let _ = model.app.attr(
                    &ComponentId::StatusLabel,
                    Attribute::Text,
                    AttrValue::String(format!("Application error: {err}")),
                );
            }
            Ok(messages) if !messages.is_empty() => {
                model.redraw = true;
                for msg in messages.into_iter() {
                    let mut msg = Some(msg);
                    while msg.is_some() {
                        msg = model.update(msg);
                    }
                }
            }
            _ => {}
        }

        // Redraw
        if model.redraw {
            let _ = model.view();
            model.redraw = false;
        }
    }

    // Terminate terminal
    let _ = model.terminal.leave_alternate_screen();
    let _ = model.terminal.disable_raw_mode();
    let _ = model.terminal.clear_screen();
    Ok(())
}

fn resolve_state_path(cli: &Cli) -> anyhow::Result<PathBuf> {
    if let Some(path) = &cli.state_file {
        return Ok(path.clone());
    }
    if let Some(path) = config::get_config_or_panic().state_file() {
        return Ok(PathBuf::from(path));
    }
    Ok(store::default_state_path()?)
}
