use std::io;
use std::time::Duration;
use std::time::Instant;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use anyhow::Context;
use crossterm::cursor;
use crossterm::event;
use crossterm::execute;
use crossterm::style;
use crossterm::terminal;
use tracing::debug;
use tracing::info;
use tracing_subscriber::EnvFilter;

use agelife::camera::Camera;
use agelife::events::AppEvent;
use agelife::events::CameraEvent;
use agelife::events::EngineEvent;
use agelife::events::Event;
use agelife::io::convert_event;
use agelife::world::World;

/// World dimensions, in cells
const WORLD_WIDTH: usize = 96;
const WORLD_HEIGHT: usize = 64;

/// Time between generations at startup. Halved by `+`, doubled by `-`.
const DEFAULT_REFRESH: Duration = Duration::from_millis(125);
const MIN_REFRESH: Duration = Duration::from_millis(16);
const MAX_REFRESH: Duration = Duration::from_secs(4);

fn main() -> anyhow::Result<()> {
    // The alternate screen owns stdout, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    terminal::enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(
        stdout,
        terminal::EnterAlternateScreen,
        event::EnableMouseCapture,
        cursor::Hide,
    )?;

    let res = run(&mut stdout);

    execute!(
        stdout,
        cursor::Show,
        event::DisableMouseCapture,
        terminal::LeaveAlternateScreen,
    )?;
    terminal::disable_raw_mode()?;

    res
}

fn run(stdout: &mut io::Stdout) -> anyhow::Result<()> {
    // One terminal character holds a 2x4 block of cells, and the last row is
    // kept for the status line
    let (cols, rows) = terminal::size().context("Failed to query terminal size")?;
    let mut cam = Camera::new(2 * cols as usize, 4 * rows.saturating_sub(1) as usize);

    let mut seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("System clock is set before the unix epoch")?
        .as_nanos() as u64;

    let mut world = World::new(WORLD_WIDTH, WORLD_HEIGHT);
    world.randomize(seed);
    info!(seed, width = WORLD_WIDTH, height = WORLD_HEIGHT, "world seeded");

    let mut refresh = DEFAULT_REFRESH;
    let mut next_tick = Instant::now() + refresh;

    loop {
        // Poll input until the next generation is due
        let timeout = next_tick.saturating_duration_since(Instant::now());

        if event::poll(timeout)? {
            let event = convert_event(event::read()?);

            match event {
                None => {}
                Some(Event::AppEvent(AppEvent::Exit)) => break,

                Some(Event::EngineEvent(engine_event)) => match engine_event {
                    EngineEvent::Advance(n) => world.advance(n),
                    EngineEvent::TogglePause => world.toggle_pause(),
                    EngineEvent::ToggleAging => world.toggle_aging(),
                    EngineEvent::Reseed => {
                        seed = seed.wrapping_add(1);
                        world.randomize(seed);
                        info!(seed, "world reseeded");
                    }
                },

                Some(Event::AppEvent(app_event)) => match app_event {
                    AppEvent::CameraEvent(CameraEvent::Move { dx, dy }) => {
                        cam.offset_x(dx);
                        cam.offset_y(dy);
                    }
                    AppEvent::ToggleCell { col, row } => {
                        let (x, y) = cam.screen_to_world(col, row);

                        // A click off the grid is not our bug to die over
                        match world.toggle(x, y) {
                            Ok(v) => debug!(x, y, v, "cell toggled"),
                            Err(e) => debug!(x, y, "edit dropped: {e}"),
                        }
                    }
                    AppEvent::Faster => refresh = (refresh / 2).max(MIN_REFRESH),
                    AppEvent::Slower => refresh = (refresh * 2).min(MAX_REFRESH),
                    AppEvent::Exit => unreachable!("handled above"),
                },
            }
        }

        if Instant::now() >= next_tick {
            world.step();
            next_tick += refresh;
        }

        cam.reset();
        cam.draw_grid(&world.grid);
        cam.draw_grid_outline(&world.grid);
        let frame = cam.render();

        execute!(stdout, cursor::MoveTo(0, 0))?;
        for line in frame.lines() {
            execute!(stdout, style::Print(line), cursor::MoveToNextLine(1))?;
        }

        let status = format!(
            "gen {:<8} {:<7} aging {:<3} {:>4} ms/gen   [space] pause  [v] aging  [r] reseed  [q] quit",
            world.generation(),
            if world.is_paused() { "paused" } else { "running" },
            if world.aging() { "on" } else { "off" },
            refresh.as_millis(),
        );
        execute!(stdout, style::Print(status))?;
    }

    Ok(())
}
