//! Walk a patrol route on a character grid.
//!
//! Demonstrates: ingest lines through a marker scanner → build a mutable
//! grid → walk from the start marker, turning right at every obstacle,
//! marking visited cells until the walker leaves the grid.

use quadrille::prelude::*;

const MAP: &str = "\
....#.....
.........#
..........
..#.......
.......#..
..........
.#..S.....
........#.
#.........
......#...";

fn main() {
    let mut scanner = MarkerScanner::with_max_count('S', '.', 1);
    let mut grid = GridMut::new();
    for (y, line) in MAP.lines().enumerate() {
        let line = scanner.scan_line(line, y as i32).unwrap();
        grid.push_row(line.chars().collect()).unwrap();
    }
    let start = scanner.single_result().unwrap();
    println!("start at {start}, grid {}x{}", grid.width(), grid.height());

    let mut pos = start;
    let mut facing = Direction::Up;
    let mut visited = 0usize;
    loop {
        if *grid.get(pos).unwrap() != 'X' {
            grid.set(pos, 'X').unwrap();
            visited += 1;
        }
        let ahead = pos.move_in(facing);
        match grid.get(ahead) {
            Ok(&'#') => facing = facing.turn(Turn::Right).unwrap(),
            Ok(_) => pos = ahead,
            // Left the grid: patrol over.
            Err(_) => break,
        }
    }

    println!("visited {visited} distinct cells:");
    for y in 0..grid.height() as i32 {
        let row: String = grid.scan_row(y).unwrap().map(|(_, c)| *c).collect();
        println!("{row}");
    }
}
