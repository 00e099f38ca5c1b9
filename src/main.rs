//! Command-line driver: parse a maze file, solve it, print the result and
//! write a rendered image.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use maze_pathfinding::render::{self, RenderOptions};
use maze_pathfinding::{parser, solve};

#[derive(Parser)]
#[command(name = "maze-solver")]
#[command(about = "Solve a text maze with A* and render the result", long_about = None)]
struct Args {
    /// Path to the maze description file
    maze: PathBuf,

    /// Where to write the rendered image
    #[arg(long, default_value = "maze.png")]
    output: PathBuf,

    /// Color explored cells that are not on the solution path
    #[arg(long)]
    show_explored: bool,

    /// Annotate solution and explored cells with their cost from start
    #[arg(long)]
    annotate_costs: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let map = match parser::read_maze(&args.maze) {
        Ok(map) => map,
        Err(e) => {
            eprintln!("{}: {}", args.maze.display(), e);
            process::exit(1);
        }
    };

    println!("Maze:");
    print!("{}", render::render_ascii(&map, None));
    println!("Solving...");
    let result = solve(&map);
    match &result {
        Some(result) => {
            println!("States explored: {}", result.explored_count);
            println!("Solution ({} steps):", result.total_cost);
            print!("{}", render::render_ascii(&map, Some(result)));
            let moves: Vec<String> = result.actions.iter().map(|a| a.to_string()).collect();
            println!("Moves: {}", moves.join(" "));
        }
        None => println!("No path from start to goal."),
    }

    let options = RenderOptions {
        show_explored: args.show_explored,
        annotate_costs: args.annotate_costs,
        ..RenderOptions::default()
    };
    if let Err(e) = render::write_image(&map, result.as_ref(), &options, &args.output) {
        eprintln!("failed to write {}: {}", args.output.display(), e);
        process::exit(1);
    }
}
