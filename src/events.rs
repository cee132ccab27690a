pub enum Event {
    EngineEvent(EngineEvent),
    AppEvent(AppEvent),
}

pub enum EngineEvent {
    /// Advance the world state by `n`
    Advance(usize),

    /// Stop or resume the simulation clock
    TogglePause,

    /// Turn the age pass on or off
    ToggleAging,

    /// Throw away the grid and reseed it
    Reseed,
}

pub enum AppEvent {
    CameraEvent(CameraEvent),

    /// Flip one cell, addressed by terminal position
    ToggleCell { col: u16, row: u16 },

    /// Halve the refresh interval
    Faster,

    /// Double the refresh interval
    Slower,

    /// Exit the application
    Exit,
}

pub enum CameraEvent {
    Move { dx: i32, dy: i32 },
}
