// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod plan;
pub mod render;
pub mod schedule;
pub mod store;
pub mod types;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, info, warn};

use crate::cli::{CliArgs, Command, EditArgs, HistoryCommand};
use crate::config::ConfigFile;
use crate::fs::{FileSystem, RealFileSystem};
use crate::plan::{PlanDocument, Task, parse_generated, sample_plan};
use crate::schedule::{EditOutcome, PlanSession, ScheduleView, TaskEdit, diagnose};
use crate::store::PlanStore;
use crate::types::{PlanId, RenderStyle};

/// High-level entry point used by `main.rs`.
///
/// Output meant for the user goes to stdout; logs go to stderr.
pub fn run(args: CliArgs, cfg: ConfigFile) -> Result<()> {
    let store_dir = args
        .store_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&cfg.store.dir));
    let app = App::new(RealFileSystem, store_dir, cfg);

    let output = app.execute(args.command)?;
    print!("{output}");
    Ok(())
}

/// Where a plan was loaded from, so edits can be written back to it.
#[derive(Debug, Clone)]
pub enum PlanOrigin {
    File {
        path: PathBuf,
        document: PlanDocument,
    },
    Stored(PlanId),
}

/// Command executor over a filesystem. Returns the text to print.
#[derive(Debug)]
pub struct App<F: FileSystem + Clone> {
    fs: F,
    store: PlanStore<F>,
    cfg: ConfigFile,
}

impl<F: FileSystem + Clone> App<F> {
    pub fn new(fs: F, store_dir: impl Into<PathBuf>, cfg: ConfigFile) -> Self {
        let store = PlanStore::new(fs.clone(), store_dir);
        Self { fs, store, cfg }
    }

    pub fn store(&self) -> &PlanStore<F> {
        &self.store
    }

    pub fn execute(&self, command: Command) -> Result<String> {
        match command {
            Command::Show { plan, style, json } => {
                let (_, tasks) = self.open_plan(&plan)?;
                let view = ScheduleView::build(&tasks);
                if json {
                    let mut text = serde_json::to_string_pretty(&view)?;
                    text.push('\n');
                    Ok(text)
                } else {
                    Ok(self.draw(&view, style))
                }
            }
            Command::Check { plan } => {
                let (_, tasks) = self.open_plan(&plan)?;
                let diag = diagnose(&tasks);
                let report = render::render_diagnostics(&diag);
                if diag.has_cycles() {
                    bail!(
                        "plan {plan} has {} dependency cycle(s)\n{report}",
                        diag.cycles.len()
                    );
                }
                Ok(report)
            }
            Command::Edit(edit) => self.edit(edit),
            Command::Import { file, goal } => {
                let text = self.fs.read_to_string(&file)?;
                let tasks = parse_generated(&text)?;
                let id = self.store.create(&goal, tasks)?;
                Ok(format!("{id}\n"))
            }
            Command::History { action } => self.history(action),
            Command::Demo { style } => {
                let view = ScheduleView::build(&sample_plan());
                Ok(self.draw(&view, style))
            }
        }
    }

    /// Resolve a `<PLAN>` argument: an existing file wins over a store id.
    pub fn open_plan(&self, reference: &str) -> Result<(PlanOrigin, Vec<Task>)> {
        let path = Path::new(reference);
        if self.fs.is_file(path) {
            debug!(path = ?path, "loading plan document");
            let text = self.fs.read_to_string(path)?;
            let document = PlanDocument::from_json(&text)
                .with_context(|| format!("parsing plan document {path:?}"))?;
            let tasks = document.tasks().to_vec();
            return Ok((
                PlanOrigin::File {
                    path: path.to_path_buf(),
                    document,
                },
                tasks,
            ));
        }

        let id = PlanId::new(reference);
        let record = self.store.load(&id)?;
        Ok((PlanOrigin::Stored(id), record.tasks))
    }

    fn persist(&self, origin: PlanOrigin, tasks: Vec<Task>) -> Result<()> {
        match origin {
            PlanOrigin::File { path, document } => {
                let json = document.with_tasks(tasks).to_json()?;
                self.fs.write(&path, json.as_bytes())?;
                info!(path = ?path, "plan document saved");
            }
            PlanOrigin::Stored(id) => {
                self.store.update_tasks(&id, tasks)?;
            }
        }
        Ok(())
    }

    fn edit(&self, args: EditArgs) -> Result<String> {
        let (origin, tasks) = self.open_plan(&args.plan)?;
        let mut session = PlanSession::new(tasks);

        let index = match (args.index, args.task.as_deref()) {
            (Some(index), _) => index,
            (None, Some(name)) => session
                .index_of(name)
                .with_context(|| format!("no task named {name:?} in plan"))?,
            (None, None) => bail!("either --index or --task is required"),
        };

        let draft = edit_from_args(&args);
        if draft.is_empty() {
            bail!("nothing to change: pass --name, --duration, --days, --depends-on or --no-depends-on");
        }

        session.begin_edit(index)?;
        session.set_draft(draft)?;
        let outcome = session.save()?;

        let mut out = render_outcome(&outcome);
        // The recomputed schedule is shown even if it could not be written back.
        if let Err(err) = self.persist(origin, session.tasks().to_vec()) {
            warn!(error = %err, "could not persist edited plan");
            out.push_str("warning: changes were not saved\n");
        }
        out.push('\n');
        out.push_str(&self.draw(session.view(), None));
        Ok(out)
    }

    fn history(&self, action: HistoryCommand) -> Result<String> {
        match action {
            HistoryCommand::List => Ok(render::render_history(&self.store.list()?)),
            HistoryCommand::Show { id } => {
                let record = self.store.load(&PlanId::new(id))?;
                let view = ScheduleView::build(&record.tasks);
                Ok(format!(
                    "{} ({})\n\n{}",
                    record.goal,
                    record.id,
                    self.draw(&view, None)
                ))
            }
            HistoryCommand::Delete { id } => {
                let id = PlanId::new(id);
                self.store.delete(&id)?;
                Ok(format!("deleted {id}\n"))
            }
            HistoryCommand::Clear => {
                let removed = self.store.clear()?;
                Ok(format!("deleted {removed} plan(s)\n"))
            }
        }
    }

    fn draw(&self, view: &ScheduleView, style: Option<RenderStyle>) -> String {
        let style = style.unwrap_or(self.cfg.display.style);
        render::render_view(view, style, self.cfg.display.width)
    }
}

fn edit_from_args(args: &EditArgs) -> TaskEdit {
    let mut edit = TaskEdit::new();
    if let Some(name) = &args.name {
        edit = edit.rename(name.as_str());
    }
    if let Some(text) = &args.duration {
        edit = edit.duration(text.as_str());
    }
    if let Some(days) = args.days {
        edit = edit.days(days);
    }
    if let Some(dep) = &args.depends_on {
        edit = edit.depends_on(dep.as_str());
    } else if args.no_depends_on {
        edit = edit.no_dependency();
    }
    edit
}

fn render_outcome(outcome: &EditOutcome) -> String {
    let mut out = String::new();
    if let Some(old) = &outcome.renamed_from {
        out.push_str(&format!("renamed \"{old}\" -> \"{}\"\n", outcome.edited));
    }
    out.push_str(&outcome.summary());
    out.push('\n');
    out
}
