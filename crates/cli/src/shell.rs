// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The interactive session loop.
//!
//! Reads one line at a time, walks the onboarding wizard while the
//! session is not active, then dispatches board commands through the
//! reducer. Assist results are drained between commands so a slow
//! collaborator never blocks input.

use std::io::{BufRead, Write};
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use kb_assist::GeminiClient;
use kb_core::project::{key_from_name, slug_from_name};
use kb_core::{
    Action, App, EditorSession, IssueDraft, IssuePatch, IssueType, Outcome, Priority,
    ProjectCategory, Roster, Session, Status,
};

use crate::assist::{AssistBridge, AssistEvent};
use crate::cli::Cli;
use crate::colors;
use crate::display;
use crate::error::{Error, Result};

/// How long a `draft ai` or `summary` request waits for a fast reply
/// before handing the prompt back.
const QUICK_REPLY_WAIT: Duration = Duration::from_millis(300);

const HELP: &str = "\
Commands:
  board                        show the board
  show <key>                   show one issue
  new <title>                  create an issue in Backlog
  draft new [status]           start a draft, optionally in a column
  draft edit <key>             load an issue into the draft
  draft set <field> <value>    set a draft field
  draft ai                     ask the assistant to fill the draft
  draft show | save | cancel   inspect, commit, or discard the draft
  set <key> <field> <value>    update an issue in place
  move <key> <status>          move an issue (todo, in_progress, done)
  rm <key>                     delete an issue
  search [term]                set or clear the search term
  filter <dim> <value>         toggle an assignee/priority/type filter
  clear                        clear all filters
  users                        list people
  summary <key>                ask the assistant for a status update
  export                       dump all issues as JSON
  logout                       sign out and reset the session
  quit                         leave
Fields: title, desc, status, priority, type, assignee, points, criteria, steps";

/// Builds the assist bridge and runs the shell over stdin/stdout.
pub fn run(cli: Cli) -> Result<()> {
    let assist = if cli.no_assist {
        None
    } else {
        match GeminiClient::from_env() {
            Some(client) => Some(AssistBridge::new(Arc::new(client))?),
            None => {
                debug!("no assist key configured; suggestions disabled");
                None
            }
        }
    };

    let mut shell = Shell::new(App::new(), assist, colors::should_colorize());
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();
    shell.run(stdin.lock(), &mut stdout)
}

/// One parsed shell command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Board,
    Show { key: String },
    New { title: String },
    Draft(DraftCommand),
    Set { key: String, field: String, value: String },
    Move { key: String, status: Status },
    Remove { key: String },
    Search { term: String },
    Filter { dimension: String, value: String },
    Clear,
    Users,
    Summary { key: String },
    Export,
    Logout,
    Help,
    Quit,
}

/// Subcommands of `draft`.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftCommand {
    New { target: Option<Status> },
    Edit { key: String },
    Set { field: String, value: String },
    Ai,
    Show,
    Save,
    Cancel,
}

/// First word and the trimmed remainder.
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(i) => (&s[..i], s[i..].trim_start()),
        None => (s, ""),
    }
}

/// Parses one input line into a command.
pub fn parse_command(line: &str) -> Result<Command> {
    let line = line.trim();
    let (word, rest) = split_word(line);
    match word.to_lowercase().as_str() {
        "board" | "b" => Ok(Command::Board),
        "show" => {
            let (key, _) = split_word(rest);
            if key.is_empty() {
                return Err(Error::Usage("show <key>"));
            }
            Ok(Command::Show { key: key.to_string() })
        }
        "new" => {
            if rest.is_empty() {
                return Err(Error::Usage("new <title>"));
            }
            Ok(Command::New { title: rest.to_string() })
        }
        "draft" => parse_draft(rest),
        "set" => {
            let (key, rest) = split_word(rest);
            let (field, value) = split_word(rest);
            if key.is_empty() || field.is_empty() || value.is_empty() {
                return Err(Error::Usage("set <key> <field> <value>"));
            }
            Ok(Command::Set {
                key: key.to_string(),
                field: field.to_string(),
                value: value.to_string(),
            })
        }
        "move" | "mv" => {
            let (key, rest) = split_word(rest);
            let (status, _) = split_word(rest);
            if key.is_empty() || status.is_empty() {
                return Err(Error::Usage("move <key> <status>"));
            }
            Ok(Command::Move { key: key.to_string(), status: status.parse::<Status>()? })
        }
        "rm" | "delete" => {
            let (key, _) = split_word(rest);
            if key.is_empty() {
                return Err(Error::Usage("rm <key>"));
            }
            Ok(Command::Remove { key: key.to_string() })
        }
        "search" => Ok(Command::Search { term: rest.to_string() }),
        "filter" => {
            let (dimension, value) = split_word(rest);
            if dimension.is_empty() || value.is_empty() {
                return Err(Error::Usage("filter <assignee|priority|type> <value>"));
            }
            Ok(Command::Filter { dimension: dimension.to_string(), value: value.to_string() })
        }
        "clear" => Ok(Command::Clear),
        "users" => Ok(Command::Users),
        "summary" => {
            let (key, _) = split_word(rest);
            if key.is_empty() {
                return Err(Error::Usage("summary <key>"));
            }
            Ok(Command::Summary { key: key.to_string() })
        }
        "export" => Ok(Command::Export),
        "logout" => Ok(Command::Logout),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        "" => Err(Error::Usage("type 'help' for the command list")),
        other => Err(Error::UnknownCommand(other.to_string())),
    }
}

fn parse_draft(rest: &str) -> Result<Command> {
    let (sub, rest) = split_word(rest);
    let command = match sub.to_lowercase().as_str() {
        "new" => {
            let (status, _) = split_word(rest);
            let target = if status.is_empty() { None } else { Some(status.parse::<Status>()?) };
            DraftCommand::New { target }
        }
        "edit" => {
            let (key, _) = split_word(rest);
            if key.is_empty() {
                return Err(Error::Usage("draft edit <key>"));
            }
            DraftCommand::Edit { key: key.to_string() }
        }
        "set" => {
            let (field, value) = split_word(rest);
            if field.is_empty() || value.is_empty() {
                return Err(Error::Usage("draft set <field> <value>"));
            }
            DraftCommand::Set { field: field.to_string(), value: value.to_string() }
        }
        "ai" => DraftCommand::Ai,
        "show" => DraftCommand::Show,
        "save" => DraftCommand::Save,
        "cancel" => DraftCommand::Cancel,
        _ => return Err(Error::Usage("draft <new|edit|set|ai|show|save|cancel>")),
    };
    Ok(Command::Draft(command))
}

/// Builds an update patch from a field name and raw value. `none`
/// clears clearable fields.
pub fn build_patch(field: &str, value: &str, roster: &Roster) -> Result<IssuePatch> {
    let mut patch = IssuePatch::default();
    match field.to_lowercase().as_str() {
        "title" => patch.title = Some(value.to_string()),
        "desc" | "description" => patch.description = Some(value.to_string()),
        "status" => patch.status = Some(value.parse::<Status>()?),
        "priority" => patch.priority = Some(value.parse::<Priority>()?),
        "type" => patch.issue_type = Some(value.parse::<IssueType>()?),
        "assignee" => {
            patch.assignee = if value.eq_ignore_ascii_case("none") {
                Some(None)
            } else {
                let user = roster
                    .resolve(value)
                    .ok_or_else(|| kb_core::Error::UnknownUser(value.to_string()))?;
                Some(Some(user.id.clone()))
            };
        }
        "points" | "estimate" => {
            patch.estimate = if value.eq_ignore_ascii_case("none") {
                Some(None)
            } else {
                let points = value
                    .parse::<u32>()
                    .map_err(|_| Error::InvalidEstimate(value.to_string()))?;
                Some(Some(points))
            };
        }
        "criteria" => {
            patch.acceptance_criteria = if value.eq_ignore_ascii_case("none") {
                Some(None)
            } else {
                Some(Some(value.to_string()))
            };
        }
        "steps" => {
            patch.steps_to_reproduce = if value.eq_ignore_ascii_case("none") {
                Some(None)
            } else {
                Some(Some(value.to_string()))
            };
        }
        other => return Err(Error::UnknownField(other.to_string())),
    }
    Ok(patch)
}

/// Folds an update patch into an open draft.
fn apply_patch_to_draft(draft: &mut IssueDraft, patch: IssuePatch) {
    if let Some(title) = patch.title {
        draft.title = title;
    }
    if let Some(description) = patch.description {
        draft.description = description;
    }
    if let Some(status) = patch.status {
        draft.status = Some(status);
    }
    if let Some(priority) = patch.priority {
        draft.priority = Some(priority);
    }
    if let Some(issue_type) = patch.issue_type {
        draft.issue_type = Some(issue_type);
    }
    if let Some(assignee) = patch.assignee {
        draft.assignee = assignee;
    }
    if let Some(criteria) = patch.acceptance_criteria {
        draft.acceptance_criteria = criteria;
    }
    if let Some(steps) = patch.steps_to_reproduce {
        draft.steps_to_reproduce = steps;
    }
    if let Some(estimate) = patch.estimate {
        draft.estimate = estimate;
    }
}

#[derive(Debug, PartialEq)]
enum Flow {
    Continue,
    Quit,
}

enum Step {
    SignIn,
    Organization,
    Project,
    Board,
}

/// The interactive session: reducer state, the open draft, and the
/// assist bridge.
pub struct Shell {
    app: App,
    editor: Option<EditorSession>,
    assist: Option<AssistBridge>,
    color: bool,
}

impl Shell {
    pub fn new(app: App, assist: Option<AssistBridge>, color: bool) -> Self {
        Shell { app, editor: None, assist, color }
    }

    /// Runs the session until quit or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        let mut lines = input.lines();
        writeln!(out, "{}", colors::header("kanbo: an in-memory kanban board", self.color))?;
        loop {
            self.drain_assist(out)?;
            let step = match self.app.session() {
                Session::Unauthenticated => Step::SignIn,
                Session::OrganizationPending { .. } => Step::Organization,
                Session::ProjectPending { .. } => Step::Project,
                Session::Active { .. } => Step::Board,
            };
            let flow = match step {
                Step::SignIn => self.prompt_sign_in(&mut lines, out)?,
                Step::Organization => self.prompt_organization(&mut lines, out)?,
                Step::Project => self.prompt_project(&mut lines, out)?,
                Step::Board => self.prompt_command(&mut lines, out)?,
            };
            if flow == Flow::Quit {
                return Ok(());
            }
        }
    }

    fn read_line<R: BufRead>(
        &self,
        lines: &mut std::io::Lines<R>,
    ) -> Result<Option<String>> {
        match lines.next() {
            Some(line) => Ok(Some(line?)),
            None => Ok(None),
        }
    }

    /// Prompts for one input; returns `None` to quit.
    fn ask<R: BufRead, W: Write>(
        &self,
        lines: &mut std::io::Lines<R>,
        out: &mut W,
        prompt: &str,
    ) -> Result<Option<String>> {
        write!(out, "{prompt}")?;
        out.flush()?;
        match self.read_line(lines)? {
            None => Ok(None),
            Some(line) if line.trim() == "quit" => Ok(None),
            Some(line) => Ok(Some(line.trim().to_string())),
        }
    }

    fn prompt_sign_in<R: BufRead, W: Write>(
        &mut self,
        lines: &mut std::io::Lines<R>,
        out: &mut W,
    ) -> Result<Flow> {
        writeln!(out, "Sign in to continue (the credential check is a local stub).")?;
        let Some(email) = self.ask(lines, out, "email: ")? else {
            return Ok(Flow::Quit);
        };
        match self.app.dispatch(Action::SignIn { email }) {
            Ok(_) => {
                let name =
                    self.app.session().user().map(|u| u.name.clone()).unwrap_or_default();
                writeln!(out, "Signed in as {name}.")?;
            }
            Err(e) => writeln!(out, "error: {e}")?,
        }
        Ok(Flow::Continue)
    }

    fn prompt_organization<R: BufRead, W: Write>(
        &mut self,
        lines: &mut std::io::Lines<R>,
        out: &mut W,
    ) -> Result<Flow> {
        writeln!(out, "Step 1 of 2: create your workspace.")?;
        let Some(name) = self.ask(lines, out, "workspace name: ")? else {
            return Ok(Flow::Quit);
        };
        let default_slug = slug_from_name(&name);
        let Some(slug) = self.ask(lines, out, &format!("workspace slug [{default_slug}]: "))?
        else {
            return Ok(Flow::Quit);
        };
        let slug = if slug.is_empty() { None } else { Some(slug) };
        match self.app.dispatch(Action::CreateOrganization { name, slug }) {
            Ok(_) => {
                if let Some(org) = self.app.session().organization() {
                    writeln!(out, "Workspace {} ({}) created.", org.name, org.slug)?;
                }
            }
            Err(e) => writeln!(out, "error: {e}")?,
        }
        Ok(Flow::Continue)
    }

    fn prompt_project<R: BufRead, W: Write>(
        &mut self,
        lines: &mut std::io::Lines<R>,
        out: &mut W,
    ) -> Result<Flow> {
        writeln!(out, "Step 2 of 2: launch your first project.")?;
        let Some(name) = self.ask(lines, out, "project name: ")? else {
            return Ok(Flow::Quit);
        };
        let default_key = key_from_name(&name);
        let Some(key) = self.ask(lines, out, &format!("issue key prefix [{default_key}]: "))?
        else {
            return Ok(Flow::Quit);
        };
        let key = if key.is_empty() { None } else { Some(key) };
        let Some(category) = self.ask(lines, out, "category [software]: ")? else {
            return Ok(Flow::Quit);
        };
        let category = if category.is_empty() {
            ProjectCategory::default()
        } else {
            match category.parse::<ProjectCategory>() {
                Ok(category) => category,
                Err(e) => {
                    writeln!(out, "error: {e}")?;
                    return Ok(Flow::Continue);
                }
            }
        };

        let action = Action::CreateProject { name, key, description: String::new(), category };
        match self.app.dispatch(action) {
            Ok(Outcome::ProjectCreated { seeded }) => {
                if let Some(project) = self.app.session().project() {
                    writeln!(out, "Project {} ({}) is ready.", project.name, project.key)?;
                }
                if seeded > 0 {
                    writeln!(out, "Seeded {seeded} starter issues.")?;
                }
                self.render_board(out)?;
            }
            Ok(_) => {}
            Err(e) => writeln!(out, "error: {e}")?,
        }
        Ok(Flow::Continue)
    }

    fn prompt_command<R: BufRead, W: Write>(
        &mut self,
        lines: &mut std::io::Lines<R>,
        out: &mut W,
    ) -> Result<Flow> {
        let prompt = self
            .app
            .session()
            .project()
            .map(|p| format!("{}> ", p.key))
            .unwrap_or_else(|| "> ".to_string());
        write!(out, "{prompt}")?;
        out.flush()?;

        let Some(line) = self.read_line(lines)? else {
            return Ok(Flow::Quit);
        };
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }
        match parse_command(&line).and_then(|command| self.execute(command, out)) {
            Ok(flow) => Ok(flow),
            Err(e) => {
                writeln!(out, "error: {e}")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow> {
        match command {
            Command::Board => self.render_board(out)?,
            Command::Show { key } => {
                let issue = self
                    .app
                    .store()
                    .get_by_key(&key)
                    .ok_or(kb_core::Error::IssueNotFound(key))?;
                let rendered = display::render_issue(issue, self.app.roster(), self.color);
                write!(out, "{rendered}")?;
            }
            Command::New { title } => {
                let outcome = self.app.dispatch(Action::CreateIssue(IssueDraft::titled(title)))?;
                if let Outcome::Created(issue) = outcome {
                    writeln!(out, "Created {}: {}", issue.key, issue.title)?;
                }
            }
            Command::Draft(draft_command) => self.execute_draft(draft_command, out)?,
            Command::Set { key, field, value } => {
                let id = self.resolve_key(&key)?;
                let patch = build_patch(&field, &value, self.app.roster())?;
                self.app.dispatch(Action::UpdateIssue { id, patch })?;
                writeln!(out, "Updated {}.", key.to_uppercase())?;
            }
            Command::Move { key, status } => {
                let id = self.resolve_key(&key)?;
                self.app.dispatch(Action::TransitionStatus { id, status })?;
                writeln!(
                    out,
                    "Moved {} to {}.",
                    key.to_uppercase(),
                    display::column_title(status)
                )?;
            }
            Command::Remove { key } => {
                // Deleting something already gone is not an error.
                match self.app.store().get_by_key(&key).map(|i| i.id.clone()) {
                    Some(id) => {
                        self.app.dispatch(Action::DeleteIssue { id })?;
                        writeln!(out, "Deleted {}.", key.to_uppercase())?;
                    }
                    None => writeln!(out, "nothing to delete: {key}")?,
                }
            }
            Command::Search { term } => {
                let cleared = term.is_empty();
                self.app.dispatch(Action::SetSearch { term })?;
                if cleared {
                    writeln!(out, "search cleared.")?;
                } else {
                    let view = self.app.board();
                    writeln!(
                        out,
                        "{} of {} issues visible.",
                        view.total(),
                        self.app.store().len()
                    )?;
                }
            }
            Command::Filter { dimension, value } => {
                self.toggle_filter(&dimension, &value)?;
                let filter = self.app.filter();
                if filter.is_empty() {
                    writeln!(out, "filters cleared.")?;
                } else {
                    writeln!(
                        out,
                        "filters: {}",
                        display::describe_filter(filter, self.app.roster())
                    )?;
                }
            }
            Command::Clear => {
                self.app.dispatch(Action::ClearFilters)?;
                writeln!(out, "filters cleared.")?;
            }
            Command::Users => {
                for user in self.app.roster().iter() {
                    writeln!(out, "  {}  {} <{}>", user.id, user.name, user.email)?;
                }
            }
            Command::Summary { key } => self.request_summary(&key, out)?,
            Command::Export => {
                let json = serde_json::to_string_pretty(self.app.store().issues())?;
                writeln!(out, "{json}")?;
            }
            Command::Logout => {
                self.editor = None;
                self.app.dispatch(Action::SignOut)?;
                writeln!(out, "Signed out.")?;
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn execute_draft<W: Write>(&mut self, command: DraftCommand, out: &mut W) -> Result<()> {
        match command {
            DraftCommand::New { target } => {
                self.editor = Some(self.app.open_editor(target)?);
                writeln!(
                    out,
                    "Drafting a new issue. Fill it with 'draft set', commit with 'draft save'."
                )?;
            }
            DraftCommand::Edit { key } => {
                self.editor = Some(self.app.open_editor_for(&key)?);
                writeln!(out, "Editing {}.", key.to_uppercase())?;
            }
            DraftCommand::Set { field, value } => {
                let patch = build_patch(&field, &value, self.app.roster())?;
                let editor = self.editor.as_mut().ok_or(Error::NoDraft)?;
                apply_patch_to_draft(&mut editor.draft, patch);
                writeln!(out, "draft updated.")?;
            }
            DraftCommand::Ai => self.request_suggestion(out)?,
            DraftCommand::Show => {
                let editor = self.editor.as_ref().ok_or(Error::NoDraft)?;
                let rendered = display::render_draft(editor, self.app.roster(), self.color);
                write!(out, "{rendered}")?;
            }
            DraftCommand::Save => {
                let editor = self.editor.take().ok_or(Error::NoDraft)?;
                match self.app.commit_editor(&editor) {
                    Ok(Outcome::Created(issue)) => {
                        writeln!(out, "Created {}: {}", issue.key, issue.title)?;
                    }
                    Ok(Outcome::Updated { .. }) => writeln!(out, "Draft saved.")?,
                    Ok(_) => {}
                    Err(e) => {
                        // Keep the draft so the input is not lost.
                        self.editor = Some(editor);
                        return Err(e.into());
                    }
                }
            }
            DraftCommand::Cancel => {
                self.editor = None;
                writeln!(out, "draft discarded.")?;
            }
        }
        Ok(())
    }

    fn request_suggestion<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let project_key = self
            .app
            .session()
            .project()
            .map(|p| p.key.clone())
            .ok_or(kb_core::Error::NoActiveProject)?;
        let editor = self.editor.as_mut().ok_or(Error::NoDraft)?;
        if self.assist.is_none() {
            writeln!(out, "assist unavailable; no suggestion.")?;
            return Ok(());
        }

        let ticket = editor.begin_assist()?;
        let prompt = editor.draft.title.clone();
        let issue_type = editor.draft.issue_type.unwrap_or(IssueType::Task);
        if let Some(bridge) = &self.assist {
            bridge.request_details(ticket, prompt, issue_type, project_key);
        }
        writeln!(out, "suggestion requested; it lands between commands.")?;
        self.pump_quick_reply(out)
    }

    fn request_summary<W: Write>(&mut self, key: &str, out: &mut W) -> Result<()> {
        let issue = self
            .app
            .store()
            .get_by_key(key)
            .ok_or_else(|| kb_core::Error::IssueNotFound(key.to_string()))?
            .clone();
        match &self.assist {
            None => {
                writeln!(out, "{}: summary unavailable.", issue.key)?;
                Ok(())
            }
            Some(bridge) => {
                bridge.request_summary(issue);
                writeln!(out, "summary requested for {}.", key.to_uppercase())?;
                self.pump_quick_reply(out)
            }
        }
    }

    /// Gives an in-flight call a short window to land so fast replies
    /// print immediately; slow ones arrive on a later drain.
    fn pump_quick_reply<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let event = self.assist.as_ref().and_then(|b| b.recv_timeout(QUICK_REPLY_WAIT));
        if let Some(event) = event {
            self.handle_event(event, out)?;
        }
        Ok(())
    }

    fn drain_assist<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let events = match &self.assist {
            Some(bridge) => bridge.drain(),
            None => return Ok(()),
        };
        for event in events {
            self.handle_event(event, out)?;
        }
        Ok(())
    }

    fn handle_event<W: Write>(&mut self, event: AssistEvent, out: &mut W) -> Result<()> {
        match event {
            AssistEvent::Suggestion { ticket, suggestion } => match &mut self.editor {
                Some(editor) => match suggestion {
                    Some(suggestion) => {
                        if editor.apply_suggestion(ticket, suggestion) {
                            writeln!(
                                out,
                                "suggestion applied; review with 'draft show'."
                            )?;
                        } else {
                            debug!("dropping stale suggestion reply");
                        }
                    }
                    None => {
                        if editor.finish_assist(ticket) {
                            writeln!(out, "assist had no suggestion.")?;
                        }
                    }
                },
                // The draft is gone; the reply is moot.
                None => debug!("dropping suggestion for a discarded draft"),
            },
            AssistEvent::Summary { key, summary } => match summary {
                Some(summary) => writeln!(out, "{key}: {summary}")?,
                None => writeln!(out, "{key}: summary unavailable.")?,
            },
        }
        Ok(())
    }

    fn toggle_filter(&mut self, dimension: &str, value: &str) -> Result<()> {
        match dimension.to_lowercase().as_str() {
            "assignee" => {
                let id = self
                    .app
                    .roster()
                    .resolve(value)
                    .map(|u| u.id.clone())
                    .ok_or_else(|| kb_core::Error::UnknownUser(value.to_string()))?;
                self.app.dispatch(Action::ToggleAssignee { id })?;
            }
            "priority" => {
                let priority = value.parse::<Priority>()?;
                self.app.dispatch(Action::TogglePriority { priority })?;
            }
            "type" => {
                let issue_type = value.parse::<IssueType>()?;
                self.app.dispatch(Action::ToggleType { issue_type })?;
            }
            _ => return Err(Error::Usage("filter <assignee|priority|type> <value>")),
        }
        Ok(())
    }

    fn resolve_key(&self, key: &str) -> Result<String> {
        self.app
            .store()
            .get_by_key(key)
            .map(|i| i.id.clone())
            .ok_or_else(|| Error::Core(kb_core::Error::IssueNotFound(key.to_string())))
    }

    fn render_board<W: Write>(&self, out: &mut W) -> Result<()> {
        let view = self.app.board();
        let rendered = display::render_board(
            &view,
            self.app.filter(),
            self.app.store().len(),
            self.app.roster(),
            self.color,
        );
        write!(out, "{rendered}")?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "shell_tests.rs"]
mod tests;
