//! The game state machine and the per-tick collision and scoring rules.
//!
//! `Game` owns everything a run needs. The host feeds it `Input`s, calls `tick` once per frame,
//! drains the `AudioCue`s it produced and reads plain data back for drawing.

use crate::config::GameConfig;
use crate::error::SpawnError;
use crate::geometry::{Grid, Rect};
use crate::score::ScoreStore;
use crate::snake::{Direction, Snake};
use crate::targets::TargetSet;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GameState {
    #[default]
    Menu,
    Playing,
    GameOver,
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Player intents, already translated from raw key and mouse events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Steer(Direction),
    Start,
    Restart,
}

/// Sound events for the audio collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioCue {
    DirectionChanged,
    TargetCollected,
    GameOver,
    BackgroundStart,
    BackgroundStop,
}

/// Snake, targets and score of a single run. Replaced wholesale on reset.
#[derive(Debug, Clone)]
struct Run {
    snake: Snake,
    targets: TargetSet,
    score: u32,
}

pub struct Game {
    config: GameConfig,
    grid: Grid,
    walls: [Rect; 4],
    state: GameState,
    run: Run,
    high_score: u32,
    store: Box<dyn ScoreStore>,
    rng: StdRng,
    cues: Vec<AudioCue>,
}

impl Game {
    pub fn new(config: GameConfig, store: Box<dyn ScoreStore>) -> Result<Self, SpawnError> {
        Self::with_rng(config, store, StdRng::from_os_rng())
    }

    pub fn with_rng(config: GameConfig, store: Box<dyn ScoreStore>, mut rng: StdRng) -> Result<Self, SpawnError> {
        let grid = config.grid();
        let high_score = store.load();
        let run = new_run(&config, &grid, &mut rng)?;
        info!(high_score, columns = grid.columns(), rows = grid.rows(), "game ready");
        Ok(Self {
            walls: grid.walls(),
            grid,
            config,
            state: GameState::Menu,
            run,
            high_score,
            store,
            rng,
            cues: Vec::new(),
        })
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn snake(&self) -> &Snake {
        &self.run.snake
    }

    pub fn targets(&self) -> &TargetSet {
        &self.run.targets
    }

    pub fn score(&self) -> u32 {
        self.run.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn walls(&self) -> &[Rect] {
        &self.walls
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Cues raised since the last call.
    pub fn take_cues(&mut self) -> Vec<AudioCue> {
        std::mem::take(&mut self.cues)
    }

    pub fn handle_input(&mut self, input: Input) -> Result<(), SpawnError> {
        match (self.state, input) {
            (GameState::Menu, Input::Start) => {
                self.transition(GameState::Playing);
                self.cues.push(AudioCue::BackgroundStart);
            }
            (GameState::Playing, Input::Steer(direction)) => {
                if self.run.snake.set_direction(direction) {
                    self.cues.push(AudioCue::DirectionChanged);
                } else {
                    debug!(?direction, "rejected reversal");
                }
            }
            (GameState::GameOver, Input::Restart) => {
                self.reset()?;
                self.transition(GameState::Menu);
            }
            (GameState::Menu | GameState::GameOver, Input::Steer(_))
            | (GameState::Playing | GameState::GameOver, Input::Start)
            | (GameState::Menu | GameState::Playing, Input::Restart) => {
                debug!(state = %self.state, ?input, "ignored input");
            }
        }
        Ok(())
    }

    /// One logic step. Movement, then collision, then target collection.
    pub fn tick(&mut self) -> Result<(), SpawnError> {
        match self.state {
            GameState::Playing => self.tick_playing(),
            GameState::Menu | GameState::GameOver => Ok(()),
        }
    }

    fn tick_playing(&mut self) -> Result<(), SpawnError> {
        let run = &mut self.run;
        run.snake.tick(1);

        if run.snake.check_collision(&self.walls, &self.grid) {
            self.game_over();
            return Ok(());
        }

        let collected = run.targets.collect_at(run.snake.head());
        if collected.is_empty() {
            return Ok(());
        }
        for &index in &collected {
            let Some(target) = run.targets.get(index) else { continue };
            run.snake.grow();
            run.score += self.config.scoring.points_for(target.kind);
            self.cues.push(AudioCue::TargetCollected);
            debug!(kind = ?target.kind, score = run.score, length = run.snake.length(), "collected target");
        }
        run.targets.respawn(&collected, &self.grid, &run.snake, &mut self.rng)
    }

    fn game_over(&mut self) {
        self.transition(GameState::GameOver);
        self.cues.push(AudioCue::BackgroundStop);
        self.cues.push(AudioCue::GameOver);

        let score = self.run.score;
        if score > self.high_score {
            info!(score, previous = self.high_score, "new high score");
            self.high_score = score;
            if let Err(err) = self.store.save(score) {
                warn!(error = %err, "could not persist high score");
            }
        }
    }

    fn reset(&mut self) -> Result<(), SpawnError> {
        self.run = new_run(&self.config, &self.grid, &mut self.rng)?;
        Ok(())
    }

    fn transition(&mut self, next: GameState) {
        info!(from = %self.state, to = %next, score = self.run.score, "state transition");
        self.state = next;
    }
}

fn new_run(config: &GameConfig, grid: &Grid, rng: &mut StdRng) -> Result<Run, SpawnError> {
    let snake = Snake::new(grid.spawn_cell(), &config.snake);
    let targets = TargetSet::spawn_initial(grid, &snake, rng)?;
    Ok(Run { snake, targets, score: 0 })
}
