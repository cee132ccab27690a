use insta::assert_snapshot;

use agelife::camera::Camera;
use agelife::grid::Grid;
use agelife::world::World;

/// A 3x3 world holding a vertical blinker, aging off.
fn blinker_world() -> World {
    let mut world = World::new(3, 3);
    world.toggle_aging();

    for y in 0..3 {
        world.grid.write(1, y, 1).unwrap();
    }

    world
}

fn frame(cam: &mut Camera, grid: &impl Grid) -> String {
    cam.reset();
    cam.draw_grid(grid);
    cam.render().trim_end().to_string()
}

#[test]
fn blinker_renders_as_braille() {
    let world = blinker_world();
    let mut cam = Camera::new(8, 4);

    // Cells (1, 0), (1, 1), (1, 2) all land in the first braille character
    assert_snapshot!(frame(&mut cam, &world.grid), @"⠸⠀⠀⠀");
}

#[test]
fn stepped_blinker_renders_horizontally() {
    let mut world = blinker_world();
    let mut cam = Camera::new(8, 4);

    world.step();

    // (0, 1) and (1, 1) share the first character, (2, 1) spills into the second
    assert_snapshot!(frame(&mut cam, &world.grid), @"⠒⠂⠀⠀");
}

#[test]
fn panning_shifts_the_frame() {
    let world = blinker_world();
    let mut cam = Camera::new(8, 4);

    // Move the viewport one cell right: the blinker column lands on pixel
    // column 0
    cam.offset_x(1);

    assert_snapshot!(frame(&mut cam, &world.grid), @"⠇⠀⠀⠀");
}
