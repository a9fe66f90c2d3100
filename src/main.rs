use docopt::Docopt;
use rand::{weak_rng, SeedableRng, XorShiftRng};
use serde_derive::Deserialize;
use wallmaze::{
    agent::RandomWalkBot,
    generators,
    grid::WallGrid,
    renderers,
    units::{Height, Width},
};
use std::{thread, time::Duration};

const USAGE: &str = "Wallmaze

Usage:
    wallmaze_driver -h | --help
    wallmaze_driver [--grid-width=<w>] [--grid-height=<h>] [--seed=<n>] [--text-out=<path>] [--walk] [--walk-limit=<n>] [--step-millis=<ms>]

Options:
    -h --help           Show this screen.
    --grid-width=<w>    The grid width in cells. Odd widths carve fully [default: 51].
    --grid-height=<h>   The grid height in cells. Odd heights carve fully [default: 51].
    --seed=<n>          Seed the random generator to reproduce a maze exactly.
    --text-out=<path>   Output file path for the textual rendering of the maze.
    --walk              Animate a random-walk bot stepping through the maze towards the far corner.
    --walk-limit=<n>    Maximum bot steps before the walk gives up [default: 100000].
    --step-millis=<ms>  Delay between animated bot steps [default: 100].
";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_grid_width: usize,
    flag_grid_height: usize,
    flag_seed: Option<u32>,
    flag_text_out: String,
    flag_walk: bool,
    flag_walk_limit: usize,
    flag_step_millis: u64,
}

// Errors in an `errors` module so the rest of the driver can `use errors::*;`
// for everything `error_chain!` creates.
mod errors {
    use error_chain::*;
    error_chain! {

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let mut rng = match args.flag_seed {
        Some(seed) => seeded_rng(seed),
        None => weak_rng(),
    };

    let mut maze_grid = WallGrid::new(Width(args.flag_grid_width), Height(args.flag_grid_height))
        .ok_or("Grid width and height must both be positive.")?;

    generators::recursive_backtracker(&mut maze_grid, &mut rng);

    if args.flag_text_out.is_empty() {
        print!("{}", maze_grid);
    } else {
        renderers::write_text_to_file(&maze_grid.to_string(), &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
    }

    if args.flag_walk {
        walk_to_goal(&maze_grid, &mut rng, &args);
    }

    Ok(())
}

/// Step the bot until it reaches the far corner or the step limit runs out,
/// printing one frame per step. The pacing sleep is presentation only and has
/// no effect on the grid or the walk itself.
fn walk_to_goal(maze_grid: &WallGrid, rng: &mut XorShiftRng, args: &MazeArgs) {

    let mut bot = RandomWalkBot::new(maze_grid);
    let mut steps_taken = 0;

    while !bot.is_at_goal() && steps_taken < args.flag_walk_limit {
        bot.step(maze_grid, rng);
        steps_taken += 1;

        print!("{}", renderers::render_text_with_marker(maze_grid, bot.position()));
        println!();
        thread::sleep(Duration::from_millis(args.flag_step_millis));
    }

    if bot.is_at_goal() {
        println!("Bot reached the goal in {} random steps.", steps_taken);
    } else {
        println!("Bot gave up after {} random steps without reaching the goal.",
                 steps_taken);
    }
}

fn seeded_rng(seed: u32) -> XorShiftRng {
    // Three fixed non-zero words, so any u32 seed is acceptable to XorShift,
    // zero included.
    XorShiftRng::from_seed([0x193a_6754, 0xa8a7_d469, 0x9783_0e05, seed])
}
