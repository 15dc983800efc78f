use std::{
    io::{self, Write},
    thread,
    time::Duration,
};

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{self, Clear, ClearType},
};
use tracing::{debug, warn};

use crate::proc::Field;

pub const FRAME_DELAY: Duration = Duration::from_millis(100);

/// Displays one frame. `generation` is `None` for the initial state.
pub trait Renderer {
    fn render(&mut self, field: &Field, generation: Option<u64>) -> io::Result<()>;
}

pub trait Pacer {
    fn wait(&mut self);
}

pub struct Terminal<W: Write> {
    out: W,
    size_checked: bool,
}

impl Terminal<io::Stdout> {
    #[inline]
    pub fn stdout() -> Self {
        Terminal::new(io::stdout())
    }
}

impl<W: Write> Terminal<W> {
    #[inline]
    pub fn new(out: W) -> Self {
        Terminal { out, size_checked: false }
    }

    #[inline]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn check_size(&mut self, field: &Field) {
        if self.size_checked {
            return;
        }
        self.size_checked = true;

        // No terminal attached, nothing to compare against.
        let Ok((cols, rows)) = terminal::size() else {
            return;
        };
        let need_cols = 2 * field.size().w() - 1;
        let need_rows = field.size().h() + 2;
        if need_cols > cols as usize || need_rows > rows as usize {
            warn!(cols, rows, need_cols, need_rows, "terminal is smaller than the field");
        }
    }
}

impl<W: Write> Renderer for Terminal<W> {
    fn render(&mut self, field: &Field, generation: Option<u64>) -> io::Result<()> {
        self.check_size(field);

        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        if let Some(g) = generation {
            writeln!(self.out, "Generation {g}:")?;
        }
        writeln!(self.out, "{field}")?;
        writeln!(self.out)?;
        self.out.flush()
    }
}

#[derive(Debug, Default)]
pub struct Frames {
    pub frames: Vec<(Option<u64>, Field)>,
}

impl Renderer for Frames {
    fn render(&mut self, field: &Field, generation: Option<u64>) -> io::Result<()> {
        self.frames.push((generation, field.clone()));
        Ok(())
    }
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, field: &Field, generation: Option<u64>) -> io::Result<()> {
        (**self).render(field, generation)
    }
}

impl<P: Pacer + ?Sized> Pacer for &mut P {
    fn wait(&mut self) {
        (**self).wait()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Delay(pub Duration);

impl Default for Delay {
    fn default() -> Self {
        Delay(FRAME_DELAY)
    }
}

impl Pacer for Delay {
    fn wait(&mut self) {
        thread::sleep(self.0)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Pacer for NoDelay {
    fn wait(&mut self) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    AwaitingInitialRender,
    /// Holds the next generation to be shown.
    Running(u64),
    Terminated,
}

pub struct App<R, P> {
    field: Field,
    renderer: R,
    pacer: P,
    state: State,
}

impl<R: Renderer, P: Pacer> App<R, P> {
    #[inline]
    pub fn new(field: Field, renderer: R, pacer: P) -> Self {
        App {
            field,
            renderer,
            pacer,
            state: State::AwaitingInitialRender,
        }
    }

    #[inline]
    pub fn state(&self) -> State {
        self.state
    }

    pub fn start(&mut self) -> io::Result<()> {
        if self.state == State::AwaitingInitialRender {
            self.renderer.render(&self.field, None)?;
            self.state = State::Running(1);
        }
        Ok(())
    }

    /// Runs `maxgen` generations and returns the resulting field.
    pub fn run(mut self, maxgen: u64) -> io::Result<Field> {
        self.start()?;

        while let State::Running(gen) = self.state {
            if gen > maxgen {
                self.state = State::Terminated;
                break;
            }

            self.renderer.render(&self.field, Some(gen))?;
            self.field = self.field.tick();
            debug!(generation = gen, population = self.field.population(), "generation computed");
            self.pacer.wait();

            self.state = State::Running(gen + 1);
        }

        Ok(self.field)
    }
}
