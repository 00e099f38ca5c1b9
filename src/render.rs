//! Rendering of a maze and an optional solution, either as a raster image
//! or as plain text. Pure presentation; nothing here feeds back into the
//! search.

use std::path::Path;

use image::{ImageError, Rgba, RgbaImage};
use log::info;

use crate::grid::{Cell, GridMap};
use crate::search::SearchResult;

const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);
const WALL: Rgba<u8> = Rgba([40, 40, 40, 255]);
const START: Rgba<u8> = Rgba([255, 0, 0, 255]);
const GOAL: Rgba<u8> = Rgba([0, 171, 28, 255]);
const SOLUTION: Rgba<u8> = Rgba([220, 235, 113, 255]);
const EXPLORED: Rgba<u8> = Rgba([212, 97, 85, 255]);
const OPEN: Rgba<u8> = Rgba([237, 240, 252, 255]);
const TEXT: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// 3x5 bitmap digits; each row uses the low three bits, most significant
/// bit leftmost.
const DIGITS: [[u8; 5]; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111],
    [0b010, 0b110, 0b010, 0b010, 0b111],
    [0b111, 0b001, 0b111, 0b100, 0b111],
    [0b111, 0b001, 0b111, 0b001, 0b111],
    [0b101, 0b101, 0b111, 0b001, 0b001],
    [0b111, 0b100, 0b111, 0b001, 0b111],
    [0b111, 0b100, 0b111, 0b101, 0b111],
    [0b111, 0b001, 0b010, 0b010, 0b010],
    [0b111, 0b101, 0b111, 0b101, 0b111],
    [0b111, 0b101, 0b111, 0b001, 0b111],
];

/// Controls how [render_image] draws the grid.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Edge length of one grid cell in pixels.
    pub cell_size: u32,
    /// Background gap around each filled cell, leaving a grid line.
    pub cell_border: u32,
    /// Color the cells of the solution path.
    pub show_solution: bool,
    /// Color explored cells that did not end up on the solution path.
    pub show_explored: bool,
    /// Annotate solution and explored cells with their cost from start.
    pub annotate_costs: bool,
}

impl Default for RenderOptions {
    fn default() -> RenderOptions {
        RenderOptions {
            cell_size: 50,
            cell_border: 2,
            show_solution: true,
            show_explored: false,
            annotate_costs: false,
        }
    }
}

/// Draws the maze as one filled square per cell. If a [SearchResult] is
/// given, solution and explored cells are colored per the options.
pub fn render_image(
    map: &GridMap,
    result: Option<&SearchResult>,
    options: &RenderOptions,
) -> RgbaImage {
    let size = options.cell_size;
    let mut img = RgbaImage::from_pixel(
        map.width() as u32 * size,
        map.height() as u32 * size,
        BACKGROUND,
    );
    for row in 0..map.height() {
        for col in 0..map.width() {
            let cell = Cell::new(row, col);
            let (fill, cost) = cell_appearance(map, result, options, cell);
            fill_cell(&mut img, row, col, options, fill);
            if options.annotate_costs {
                if let Some(cost) = cost {
                    draw_cost(&mut img, row, col, options, cost);
                }
            }
        }
    }
    img
}

/// Renders the maze and writes it to `path`; the image format follows the
/// file extension.
pub fn write_image(
    map: &GridMap,
    result: Option<&SearchResult>,
    options: &RenderOptions,
    path: &Path,
) -> Result<(), ImageError> {
    render_image(map, result, options).save(path)?;
    info!("wrote image to {}", path.display());
    Ok(())
}

/// Text rendering of the maze, with `*` overlaid on the solution path when a
/// result is given. Matches the marker characters of the input format.
pub fn render_ascii(map: &GridMap, result: Option<&SearchResult>) -> String {
    let mut out = String::new();
    for row in 0..map.height() {
        for col in 0..map.width() {
            let cell = Cell::new(row, col);
            let ch = if map.is_wall(cell) {
                '#'
            } else if cell == map.start() {
                'A'
            } else if cell == map.goal() {
                'B'
            } else if result.is_some_and(|r| r.on_path(cell)) {
                '*'
            } else {
                ' '
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

fn cell_appearance(
    map: &GridMap,
    result: Option<&SearchResult>,
    options: &RenderOptions,
    cell: Cell,
) -> (Rgba<u8>, Option<u32>) {
    if map.is_wall(cell) {
        return (WALL, None);
    }
    if cell == map.start() {
        return (START, None);
    }
    if cell == map.goal() {
        return (GOAL, None);
    }
    if let Some(result) = result {
        if options.show_solution && result.on_path(cell) {
            return (SOLUTION, result.cost_to_reach.get(&cell).copied());
        }
        if options.show_explored && result.explored.contains(&cell) {
            return (EXPLORED, result.cost_to_reach.get(&cell).copied());
        }
    }
    (OPEN, None)
}

fn fill_cell(img: &mut RgbaImage, row: usize, col: usize, options: &RenderOptions, fill: Rgba<u8>) {
    let size = options.cell_size;
    let span = size.saturating_sub(2 * options.cell_border);
    if span == 0 {
        return;
    }
    let x0 = col as u32 * size + options.cell_border;
    let y0 = row as u32 * size + options.cell_border;
    for y in y0..y0 + span {
        for x in x0..x0 + span {
            img.put_pixel(x, y, fill);
        }
    }
}

/// Draws `cost` in decimal, centered in the cell, with the built-in 3x5
/// digit font scaled to the cell size.
fn draw_cost(img: &mut RgbaImage, row: usize, col: usize, options: &RenderOptions, cost: u32) {
    let digits: Vec<usize> = cost
        .to_string()
        .bytes()
        .map(|b| (b - b'0') as usize)
        .collect();
    let scale = (options.cell_size / 16).max(1);
    let advance = 4 * scale;
    let text_w = advance * digits.len() as u32 - scale;
    let text_h = 5 * scale;
    let cx = col as u32 * options.cell_size + options.cell_size / 2;
    let cy = row as u32 * options.cell_size + options.cell_size / 2;
    let x0 = cx.saturating_sub(text_w / 2);
    let y0 = cy.saturating_sub(text_h / 2);
    for (i, &digit) in digits.iter().enumerate() {
        for (gy, bits) in DIGITS[digit].iter().enumerate() {
            for gx in 0..3u32 {
                if bits & (1 << (2 - gx)) == 0 {
                    continue;
                }
                for dy in 0..scale {
                    for dx in 0..scale {
                        let x = x0 + i as u32 * advance + gx * scale + dx;
                        let y = y0 + gy as u32 * scale + dy;
                        if x < img.width() && y < img.height() {
                            img.put_pixel(x, y, TEXT);
                        }
                    }
                }
            }
        }
    }
}
