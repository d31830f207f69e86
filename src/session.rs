//! Headless editor session driven by a line protocol.
//!
//! One command per line. Pointer coordinates are pixel positions inside the
//! configured widget and are mapped to world coordinates by the viewport,
//! exactly as a GUI host would feed them.

use std::fmt::Write as _;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context};

use polykit_canvas::{
    Editor, EditorOptions, InputEvent, InteractionHandler, InteractionOptions, Key, KeyEvent,
    Modifiers, PlotKind, PointerEvent, PolygonRings, RenderPrimitive, SceneSync, ViewNavigator,
    ViewRange, Viewport, WheelEvent,
};
use polykit_runner::{wait_for, AlgorithmInput, AlgorithmParams, AlgorithmRunner, RunnerOutcome};
use polykit_settings::{AlgorithmDefaults, Config};

/// Scroll amount of one `wheel` step.
const WHEEL_STEP: f64 = 120.0;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Mode(PlotKind),
    Press { x: f64, y: f64, modifiers: Modifiers },
    Move { x: f64, y: f64 },
    Release { x: f64, y: f64 },
    Wheel { x: f64, y: f64, delta: f64, modifiers: Modifiers },
    Key { key: char, modifiers: Modifiers },
    End,
    Clear,
    Undo,
    Redo,
    List,
    View,
    Export,
    Branches,
    Checkout(String),
    Run,
    Quit,
}

fn parse_coord(token: Option<&str>, name: &str) -> anyhow::Result<f64> {
    let token = token.ok_or_else(|| anyhow!("missing {} coordinate", name))?;
    token
        .parse::<f64>()
        .with_context(|| format!("invalid {} coordinate: {}", name, token))
}

fn parse_modifiers<'a>(tokens: impl Iterator<Item = &'a str>) -> anyhow::Result<Modifiers> {
    let mut modifiers = Modifiers::NONE;
    for token in tokens {
        match token {
            "ctrl" => modifiers.ctrl = true,
            "shift" => modifiers.shift = true,
            other => bail!("unknown modifier: {}", other),
        }
    }
    Ok(modifiers)
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> anyhow::Result<Self> {
        let mut tokens = line.split_whitespace();
        let name = tokens.next().ok_or_else(|| anyhow!("empty command"))?;

        let command = match name {
            "mode" => {
                let kind = tokens.next().ok_or_else(|| anyhow!("missing plot type"))?;
                Command::Mode(kind.parse::<PlotKind>().map_err(|e| anyhow!(e))?)
            }
            "press" => Command::Press {
                x: parse_coord(tokens.next(), "x")?,
                y: parse_coord(tokens.next(), "y")?,
                modifiers: parse_modifiers(tokens.by_ref())?,
            },
            "move" => Command::Move {
                x: parse_coord(tokens.next(), "x")?,
                y: parse_coord(tokens.next(), "y")?,
            },
            "release" => Command::Release {
                x: parse_coord(tokens.next(), "x")?,
                y: parse_coord(tokens.next(), "y")?,
            },
            "wheel" => {
                let x = parse_coord(tokens.next(), "x")?;
                let y = parse_coord(tokens.next(), "y")?;
                let delta = match tokens.next() {
                    Some("up") => WHEEL_STEP,
                    Some("down") => -WHEEL_STEP,
                    other => bail!("wheel direction must be up or down, got {:?}", other),
                };
                Command::Wheel {
                    x,
                    y,
                    delta,
                    modifiers: parse_modifiers(tokens.by_ref())?,
                }
            }
            "key" => {
                let key = tokens
                    .next()
                    .and_then(|k| k.chars().next())
                    .ok_or_else(|| anyhow!("missing key"))?;
                Command::Key {
                    key,
                    modifiers: parse_modifiers(tokens.by_ref())?,
                }
            }
            "checkout" => {
                let branch = tokens.next().ok_or_else(|| anyhow!("missing branch name"))?;
                Command::Checkout(branch.to_string())
            }
            "end" => Command::End,
            "clear" => Command::Clear,
            "undo" => Command::Undo,
            "redo" => Command::Redo,
            "list" => Command::List,
            "view" => Command::View,
            "export" => Command::Export,
            "branches" => Command::Branches,
            "run" => Command::Run,
            "quit" | "exit" => Command::Quit,
            other => bail!("unknown command: {}", other),
        };

        if let Some(extra) = tokens.next() {
            bail!("unexpected argument: {}", extra);
        }
        Ok(command)
    }
}

/// Work for the external algorithm collaborator.
#[derive(Debug, Clone, PartialEq)]
pub enum JobRequest {
    ListBranches,
    Checkout(String),
    Execute(AlgorithmParams),
}

impl JobRequest {
    /// Starts the job in the background and waits for its single outcome.
    pub async fn run(self, runner: &AlgorithmRunner) -> RunnerOutcome {
        match self {
            JobRequest::ListBranches => match runner.spawn_list_branches() {
                Ok(rx) => match wait_for(rx).await {
                    RunnerOutcome::Completed(branches) => {
                        RunnerOutcome::Completed(branches.join("\n"))
                    }
                    RunnerOutcome::Failed(message) => RunnerOutcome::Failed(message),
                },
                Err(e) => RunnerOutcome::Failed(e.to_string()),
            },
            JobRequest::Checkout(branch) => match runner.spawn_checkout_branch(branch) {
                Ok(rx) => match wait_for(rx).await {
                    RunnerOutcome::Completed(branch) => {
                        RunnerOutcome::Completed(format!("Switched to branch {}", branch))
                    }
                    failed => failed,
                },
                Err(e) => RunnerOutcome::Failed(e.to_string()),
            },
            JobRequest::Execute(params) => match runner.spawn_execute(params) {
                Ok(rx) => wait_for(rx).await,
                Err(e) => RunnerOutcome::Failed(e.to_string()),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Output(String),
    Silent,
    Job(JobRequest),
    Quit,
}

#[derive(Debug)]
pub struct Session {
    editor: Editor,
    handler: InteractionHandler,
    viewport: Viewport,
    scene: SceneSync,
    defaults: AlgorithmDefaults,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        let options = EditorOptions {
            point_color: config.colors.point.clone(),
            polyline_color: config.colors.polyline.clone(),
            polygon_color: config.colors.polygon.clone(),
            history_limit: config.history.max_depth,
        };
        let interaction = InteractionOptions {
            delete_threshold: config.interaction.delete_threshold,
            drag_threshold_px: config.interaction.drag_threshold_px,
            scroll_up_zoom_factor: config.interaction.scroll_up_zoom_factor,
            scroll_down_zoom_factor: config.interaction.scroll_down_zoom_factor,
        };
        let [x_min, x_max] = config.view.x_range;
        let [y_min, y_max] = config.view.y_range;
        let viewport = Viewport::new(
            ViewRange::new((x_min, x_max), (y_min, y_max)),
            config.view.width_px,
            config.view.height_px,
        );

        tracing::debug!(
            "Created session with {}x{} view",
            viewport.canvas_width(),
            viewport.canvas_height()
        );
        Self {
            editor: Editor::with_options(options),
            handler: InteractionHandler::with_options(interaction),
            viewport,
            scene: SceneSync::new(),
            defaults: config.runner.defaults.clone(),
        }
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn scene(&self) -> &SceneSync {
        &self.scene
    }

    /// Parses and executes one protocol line. Blank lines and `#` comments
    /// are ignored.
    pub fn handle_line(&mut self, line: &str) -> anyhow::Result<Reply> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(Reply::Silent);
        }
        let command = line.parse::<Command>()?;
        self.execute(command)
    }

    pub fn execute(&mut self, command: Command) -> anyhow::Result<Reply> {
        let reply = match command {
            Command::Mode(kind) => {
                self.editor.set_plot_type(kind);
                Reply::Output(format!("mode {}", kind))
            }
            Command::Press { x, y, modifiers } => {
                let event = PointerEvent::left(x, y).with_modifiers(modifiers);
                self.dispatch(InputEvent::Press(event))
            }
            Command::Move { x, y } => self.dispatch(InputEvent::Move(PointerEvent::left(x, y))),
            Command::Release { x, y } => {
                self.dispatch(InputEvent::Release(PointerEvent::left(x, y)))
            }
            Command::Wheel {
                x,
                y,
                delta,
                modifiers,
            } => self.dispatch(InputEvent::Wheel(WheelEvent {
                x,
                y,
                delta,
                modifiers,
            })),
            Command::Key { key, modifiers } => self.dispatch(InputEvent::KeyPress(KeyEvent {
                key: Key::Char(key),
                modifiers,
            })),
            Command::End => {
                self.editor.clear_current_plot();
                Reply::Output("ok".to_string())
            }
            Command::Clear => {
                self.editor.clear();
                Reply::Output("ok".to_string())
            }
            Command::Undo => Reply::Output(outcome(self.editor.undo(), "undo", "nothing to undo")),
            Command::Redo => Reply::Output(outcome(self.editor.redo(), "redo", "nothing to redo")),
            Command::List => Reply::Output(self.list()),
            Command::View => {
                let range = self.viewport.view_range();
                Reply::Output(format!(
                    "x [{}, {}] y [{}, {}]",
                    range.x_min, range.x_max, range.y_min, range.y_max
                ))
            }
            Command::Export => Reply::Output(self.export()?),
            Command::Branches => Reply::Job(JobRequest::ListBranches),
            Command::Checkout(branch) => Reply::Job(JobRequest::Checkout(branch)),
            Command::Run => Reply::Job(JobRequest::Execute(self.algorithm_params()?)),
            Command::Quit => Reply::Quit,
        };
        Ok(reply)
    }

    fn dispatch(&mut self, event: InputEvent) -> Reply {
        let consumed = self
            .handler
            .handle(event, &mut self.editor, &mut self.viewport);
        Reply::Output(outcome(consumed, "consumed", "ignored"))
    }

    /// Brings the display table up to date and lists it in store order.
    fn list(&mut self) -> String {
        let store = self.editor.store_mut();
        self.scene.sync(store);

        let mut text = String::new();
        for plot in self.editor.store().iter() {
            let shape = match self.scene.item(plot.id()).map(|item| &item.primitive) {
                None | Some(RenderPrimitive::Empty) => "empty",
                Some(RenderPrimitive::Markers(_)) => "markers",
                Some(RenderPrimitive::OpenPath(_)) => "open",
                Some(RenderPrimitive::ClosedRing(_)) => "closed",
            };
            let coords = plot
                .points()
                .iter()
                .map(|p| format!("({}, {})", p.x(), p.y()))
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(
                text,
                "{} {} {} {} {}",
                plot.id(),
                plot.kind(),
                plot.color(),
                shape,
                coords
            )
            .ok();
        }
        if text.is_empty() {
            text.push_str("no plots");
        }
        text.trim_end().to_string()
    }

    fn algorithm_params(&self) -> anyhow::Result<AlgorithmParams> {
        let input = AlgorithmInput::from_store(self.editor.store());
        Ok(AlgorithmParams::new(input, &self.defaults)?)
    }

    fn export(&self) -> anyhow::Result<String> {
        let rings = PolygonRings::from_store(self.editor.store());
        let params = self.algorithm_params()?;
        let document = serde_json::json!({
            "boundary": rings.boundary,
            "obstacles": rings.obstacles,
            "parameters": params,
        });
        Ok(serde_json::to_string_pretty(&document)?)
    }
}

fn outcome(ok: bool, yes: &str, no: &str) -> String {
    let text = if ok { yes } else { no };
    text.to_string()
}
