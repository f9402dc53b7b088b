//! Main TUI application state and logic

use crate::engine::{dfs, ArrayStep, BstStep, StepEvent, TreeStep};
use crate::input::{parse_delimited_list, parse_edges, parse_integers, InputError};
use crate::layout::{bisection, circular, level_order, Position};
use crate::steps::{StepCursor, ViewState};
use crate::structures::graph::Adjacency;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};
use rustc_hash::FxHashMap;
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// One visualization per tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Tab {
    Array,
    Tree,
    Bst,
    Dfs,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Array, Tab::Tree, Tab::Bst, Tab::Dfs];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Array => "Array",
            Tab::Tree => "Tree",
            Tab::Bst => "BST",
            Tab::Dfs => "DFS",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Array => 0,
            Tab::Tree => 1,
            Tab::Bst => 2,
            Tab::Dfs => 3,
        }
    }

    pub fn next(self) -> Self {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }

    /// Input fields shown on this tab; the first one is edited with `e`
    pub fn fields(self) -> &'static [InputField] {
        match self {
            Tab::Array => &[InputField::Array],
            Tab::Tree => &[InputField::Tree],
            Tab::Bst => &[InputField::Bst],
            Tab::Dfs => &[InputField::DfsNodes, InputField::DfsEdges],
        }
    }
}

/// An editable raw-text input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Array,
    Tree,
    Bst,
    DfsNodes,
    DfsEdges,
}

impl InputField {
    pub fn label(self) -> &'static str {
        match self {
            InputField::Array => "Array elements (comma separated)",
            InputField::Tree => "Tree nodes (comma separated)",
            InputField::Bst => "BST values (comma separated)",
            InputField::DfsNodes => "Nodes (comma separated)",
            InputField::DfsEdges => "Edges (A-B,B-C,...)",
        }
    }
}

/// Startup configuration, normally filled in from the command line
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub array_input: String,
    pub tree_input: String,
    pub bst_input: String,
    pub dfs_nodes_input: String,
    pub dfs_edges_input: String,
    pub initial_tab: Tab,
    pub play_interval: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            array_input: "1,2,3,4,5".to_string(),
            tree_input: "A,B,C,D,E,F,G".to_string(),
            bst_input: "7,3,10,1,5,8,12".to_string(),
            dfs_nodes_input: "A,B,C,D,E".to_string(),
            dfs_edges_input: "A-B,B-C,C-D,D-E,A-E".to_string(),
            initial_tab: Tab::Array,
            play_interval: Duration::from_secs(1),
        }
    }
}

/// Raw text of every input field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInputs {
    pub array: String,
    pub tree: String,
    pub bst: String,
    pub dfs_nodes: String,
    pub dfs_edges: String,
}

impl RawInputs {
    pub fn get(&self, field: InputField) -> &str {
        match field {
            InputField::Array => &self.array,
            InputField::Tree => &self.tree,
            InputField::Bst => &self.bst,
            InputField::DfsNodes => &self.dfs_nodes,
            InputField::DfsEdges => &self.dfs_edges,
        }
    }

    fn get_mut(&mut self, field: InputField) -> &mut String {
        match field {
            InputField::Array => &mut self.array,
            InputField::Tree => &mut self.tree,
            InputField::Bst => &mut self.bst,
            InputField::DfsNodes => &mut self.dfs_nodes,
            InputField::DfsEdges => &mut self.dfs_edges,
        }
    }
}

/// Text being typed into an input field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditState {
    pub field: InputField,
    pub buffer: String,
}

/// Traversal built from one `(nodes, edges)` input pair
#[derive(Debug, Clone, Default)]
pub struct DfsModel {
    key: (String, String),
    pub nodes: Vec<String>,
    pub adjacency: Adjacency,
    pub trace: Vec<StepEvent>,
    pub positions: FxHashMap<String, Position>,
    /// First declaration index of each node, for palette colors
    pub color_index: FxHashMap<String, usize>,
}

impl DfsModel {
    fn build(nodes_raw: &str, edges_raw: &str) -> Self {
        let nodes = parse_delimited_list(nodes_raw);
        let adjacency = Adjacency::from_edges(&nodes, &parse_edges(edges_raw));
        let trace = match nodes.first() {
            Some(start) => dfs::trace(&nodes, &adjacency, start),
            None => Vec::new(),
        };
        let positions = circular::layout(&nodes);

        let mut color_index = FxHashMap::default();
        for (i, node) in nodes.iter().enumerate() {
            color_index.entry(node.clone()).or_insert(i);
        }

        debug!(
            nodes = nodes.len(),
            steps = trace.len(),
            "rebuilt traversal"
        );
        DfsModel {
            key: (nodes_raw.to_string(), edges_raw.to_string()),
            nodes,
            adjacency,
            trace,
            positions,
            color_index,
        }
    }
}

/// The main application state
pub struct App {
    pub inputs: RawInputs,

    /// Currently shown tab
    pub active_tab: Tab,

    /// Per-tab cursors, reset whenever their raw input changes
    pub array_view: ViewState<String>,
    pub tree_view: ViewState<String>,
    pub bst_view: ViewState<String>,
    pub dfs_view: ViewState<(String, String)>,

    /// Parsed inputs for the current raw text
    pub array_values: Vec<String>,
    pub tree_values: Vec<String>,
    pub bst_values: Result<Vec<i64>, InputError>,
    pub dfs: DfsModel,

    /// Input being edited, if any
    pub editing: Option<EditState>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    pub play_interval: Duration,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let mut app = App {
            inputs: RawInputs {
                array: config.array_input,
                tree: config.tree_input,
                bst: config.bst_input,
                dfs_nodes: config.dfs_nodes_input,
                dfs_edges: config.dfs_edges_input,
            },
            active_tab: config.initial_tab,
            array_view: ViewState::new(),
            tree_view: ViewState::new(),
            bst_view: ViewState::new(),
            dfs_view: ViewState::new(),
            array_values: Vec::new(),
            tree_values: Vec::new(),
            bst_values: Ok(Vec::new()),
            dfs: DfsModel::default(),
            editing: None,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            last_play_time: Instant::now(),
            play_interval: config.play_interval,
        };
        app.refresh();
        app
    }

    /// Re-derive every tab from its raw input and sync the cursors.
    ///
    /// Cursors whose input changed go back to step 0; the traversal is only
    /// recomputed when its own inputs changed.
    pub fn refresh(&mut self) {
        self.array_values = parse_delimited_list(&self.inputs.array);
        self.array_view
            .sync(&self.inputs.array, self.array_values.len());

        self.tree_values = parse_delimited_list(&self.inputs.tree);
        self.tree_view.sync(&self.inputs.tree, self.tree_values.len());

        self.bst_values = parse_integers(&self.inputs.bst);
        let bst_len = self.bst_values.as_ref().map_or(0, Vec::len);
        self.bst_view.sync(&self.inputs.bst, bst_len);

        let dfs_key = (self.inputs.dfs_nodes.clone(), self.inputs.dfs_edges.clone());
        if self.dfs.key != dfs_key {
            self.dfs = DfsModel::build(&dfs_key.0, &dfs_key.1);
        }
        self.dfs_view.sync(&dfs_key, self.dfs.trace.len());
    }

    /// Cursor of the visible tab
    pub fn active_cursor(&self) -> &StepCursor {
        match self.active_tab {
            Tab::Array => self.array_view.cursor(),
            Tab::Tree => self.tree_view.cursor(),
            Tab::Bst => self.bst_view.cursor(),
            Tab::Dfs => self.dfs_view.cursor(),
        }
    }

    pub fn array_step(&self) -> Option<ArrayStep> {
        ArrayStep::at(&self.array_values, self.array_view.index())
    }

    pub fn tree_step(&self) -> Option<TreeStep> {
        TreeStep::at(&self.tree_values, self.tree_view.index())
    }

    pub fn bst_step(&self) -> Option<BstStep<i64>> {
        let values = self.bst_values.as_ref().ok()?;
        BstStep::at(values, self.bst_view.index())
    }

    pub fn dfs_step(&self) -> Option<&StepEvent> {
        self.dfs.trace.get(self.dfs_view.index())
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        info!(tab = self.active_tab.title(), "starting event loop");
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.is_playing && self.last_play_time.elapsed() >= self.play_interval {
                if self.active_cursor().is_at_end() || self.active_cursor().is_empty() {
                    self.is_playing = false;
                    self.status_message = "Playback complete".to_string();
                } else {
                    self.step_forward();
                    self.status_message = "Playing...".to_string();
                }
                self.last_play_time = Instant::now();
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub(crate) fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();
        let field_count = self.active_tab.fields().len() as u16;

        // Tabs | Inputs | Panes | Status
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(field_count + 2),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        super::panes::render_tabs(frame, main_chunks[0], self.active_tab);

        super::panes::render_input_pane(
            frame,
            main_chunks[1],
            super::panes::InputRenderData {
                fields: self.active_tab.fields(),
                inputs: &self.inputs,
                editing: self.editing.as_ref(),
            },
        );

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(main_chunks[2]);

        self.render_visualization(frame, columns[0]);
        self.render_reasoning(frame, columns[1]);

        let cursor = *self.active_cursor();
        super::panes::render_status_bar(
            frame,
            main_chunks[3],
            &self.status_message,
            &cursor,
            self.is_playing,
            self.editing.is_some(),
        );
    }

    fn render_visualization(&self, frame: &mut Frame, area: Rect) {
        match self.active_tab {
            Tab::Array => super::panes::render_array_pane(
                frame,
                area,
                &self.array_values,
                self.array_step().map(|s| s.index),
            ),
            Tab::Tree => {
                let layout = level_order::layout(self.tree_values.len());
                super::panes::render_tree_pane(
                    frame,
                    area,
                    &self.tree_values,
                    &layout,
                    self.tree_step().map(|s| s.index),
                );
            }
            Tab::Bst => {
                let step = self.bst_step();
                let layout = step
                    .as_ref()
                    .map(|s| bisection::layout(&s.build.tree, &s.build.path));
                super::panes::render_bst_pane(frame, area, step.as_ref(), layout.as_ref());
            }
            Tab::Dfs => {
                super::panes::render_graph_pane(frame, area, &self.dfs, self.dfs_step())
            }
        }
    }

    fn render_reasoning(&self, frame: &mut Frame, area: Rect) {
        use super::panes::ReasoningRenderData;

        let data = match self.active_tab {
            Tab::Array => ReasoningRenderData::from_reasoning(self.array_step().map(|s| s.reasoning)),
            Tab::Tree => ReasoningRenderData::from_reasoning(self.tree_step().map(|s| s.reasoning)),
            Tab::Bst => match &self.bst_values {
                Err(e) => ReasoningRenderData::warning(
                    "Please enter only integer values for BST.",
                    e.to_string(),
                ),
                Ok(_) => ReasoningRenderData::from_reasoning(self.bst_step().map(|s| s.reasoning)),
            },
            Tab::Dfs => match self.dfs_step() {
                Some(event) => ReasoningRenderData::from_reasoning(Some(event.reasoning()))
                    .with_detail("Stack", event.stack_after().join(" → "))
                    .with_detail(
                        "Visited",
                        event
                            .visited()
                            .iter()
                            .cloned()
                            .collect::<Vec<_>>()
                            .join(", "),
                    ),
                None => ReasoningRenderData::from_reasoning(None),
            },
        };

        super::panes::render_reasoning_pane(frame, area, data);
    }

    /// Handle keyboard events
    pub(crate) fn handle_key_event(&mut self, key: KeyEvent) {
        if self.editing.is_some() {
            self.handle_edit_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char(c @ '1'..='4') => {
                self.is_playing = false;
                if let Some(index) = c.to_digit(10) {
                    self.active_tab = Tab::ALL[index as usize - 1];
                }
            }
            KeyCode::Tab => {
                self.is_playing = false;
                self.active_tab = self.active_tab.next();
            }
            KeyCode::BackTab => {
                self.is_playing = false;
                self.active_tab = self.active_tab.prev();
            }
            KeyCode::Right | KeyCode::Char('n') => {
                self.is_playing = false;
                self.step_forward();
                self.status_message = "Stepped forward".to_string();
            }
            KeyCode::Left | KeyCode::Char('p') => {
                self.is_playing = false;
                self.step_backward();
                self.status_message = "Stepped backward".to_string();
            }
            KeyCode::Char('r') | KeyCode::Backspace => {
                self.is_playing = false;
                self.reset();
                self.status_message = "Reset to first step".to_string();
            }
            KeyCode::Enter => {
                self.is_playing = false;
                self.jump_to_end();
                self.status_message = "Jumped to last step".to_string();
            }
            KeyCode::Char('e') => self.start_editing(0),
            KeyCode::Char('g') if self.active_tab == Tab::Dfs => self.start_editing(1),
            KeyCode::Char(' ') => {
                self.is_playing = !self.is_playing;
                if self.is_playing {
                    self.last_play_time = Instant::now()
                        .checked_sub(self.play_interval)
                        .unwrap_or(Instant::now());
                    self.status_message = "Playing...".to_string();
                } else {
                    self.status_message = "Paused".to_string();
                }
            }
            _ => {}
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        let Some(edit) = self.editing.as_mut() else {
            return;
        };

        match key.code {
            KeyCode::Enter => {
                if let Some(edit) = self.editing.take() {
                    self.commit_edit(edit);
                }
            }
            KeyCode::Esc => {
                self.editing = None;
                self.status_message = "Edit cancelled".to_string();
            }
            KeyCode::Backspace => {
                edit.buffer.pop();
            }
            KeyCode::Char(c) => {
                edit.buffer.push(c);
            }
            _ => {}
        }
    }

    fn start_editing(&mut self, field_index: usize) {
        let Some(&field) = self.active_tab.fields().get(field_index) else {
            return;
        };
        self.is_playing = false;
        self.editing = Some(EditState {
            field,
            buffer: self.inputs.get(field).to_string(),
        });
        self.status_message = format!("Editing {}", field.label());
    }

    fn commit_edit(&mut self, edit: EditState) {
        let EditState { field, buffer } = edit;
        debug!(?field, input = %buffer, "input committed");
        *self.inputs.get_mut(field) = buffer;
        self.refresh();
        self.status_message = match (self.active_tab, &self.bst_values) {
            (Tab::Bst, Err(e)) => format!("Invalid input: {}", e),
            _ => "Input updated".to_string(),
        };
    }

    fn step_forward(&mut self) {
        match self.active_tab {
            Tab::Array => self.array_view.advance(),
            Tab::Tree => self.tree_view.advance(),
            Tab::Bst => self.bst_view.advance(),
            Tab::Dfs => self.dfs_view.advance(),
        }
    }

    fn step_backward(&mut self) {
        match self.active_tab {
            Tab::Array => self.array_view.retreat(),
            Tab::Tree => self.tree_view.retreat(),
            Tab::Bst => self.bst_view.retreat(),
            Tab::Dfs => self.dfs_view.retreat(),
        }
    }

    fn reset(&mut self) {
        match self.active_tab {
            Tab::Array => self.array_view.reset(),
            Tab::Tree => self.tree_view.reset(),
            Tab::Bst => self.bst_view.reset(),
            Tab::Dfs => self.dfs_view.reset(),
        }
    }

    fn jump_to_end(&mut self) {
        match self.active_tab {
            Tab::Array => self.array_view.jump_to_end(),
            Tab::Tree => self.tree_view.jump_to_end(),
            Tab::Bst => self.bst_view.jump_to_end(),
            Tab::Dfs => self.dfs_view.jump_to_end(),
        }
    }
}
