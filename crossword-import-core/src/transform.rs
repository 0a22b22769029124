//! Conversion of a fetched puzzle into an ipuz document.
//!
//! [`convert`] is the entrypoint; the grid, clue and assembly steps are
//! public so they can be exercised on their own.

use tracing::{debug, error, info};

use crate::error::ImportError;
use crate::ipuz::{
    CellStyle, Clue, Clues, IpuzDocument, PuzzleCell, BLOCK, EMPTY, IPUZ_KIND_CROSSWORD,
    IPUZ_VERSION, SHAPE_CIRCLE,
};
use crate::source::{self, PuzzleBody, PuzzleResponse};

pub const ACROSS: &str = "Across";
pub const AUTHOR_SEPARATOR: &str = " & ";

/// Parallel puzzle and solution grids, both `height` rows of `width` cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Grids {
    pub puzzle: Vec<Vec<PuzzleCell>>,
    pub solution: Vec<Vec<String>>,
}

/// Full conversion: body count check, grid, clues and document assembly.
pub fn convert(response: &PuzzleResponse, title: &str) -> Result<IpuzDocument, ImportError> {
    let body = response.single_body().map_err(|e| {
        error!(error = %e, "Puzzle response has an unexpected body shape");
        e
    })?;
    let grids = transform_grid(body)?;
    let clues = transform_clues(&body.clues)?;
    info!(
        width = body.dimensions.width,
        height = body.dimensions.height,
        across = clues.across.len(),
        down = clues.down.len(),
        "Converted puzzle body"
    );
    Ok(assemble_document(response, body, grids, clues, title))
}

pub fn transform_grid(body: &PuzzleBody) -> Result<Grids, ImportError> {
    let width = body.dimensions.width;
    let height = body.dimensions.height;

    // Dimensions come from upstream; never size anything from them unchecked.
    match width.checked_mul(height) {
        Some(total) if total <= body.cells.len() => {}
        _ => {
            error!(width, height, cells = body.cells.len(), "Grid dimensions exceed cell array");
            return Err(ImportError::MissingCell {
                index: body.cells.len(),
            });
        }
    }

    let mut puzzle = Vec::with_capacity(height);
    let mut solution = Vec::with_capacity(height);

    for row in 0..height {
        let mut puzzle_row = Vec::with_capacity(width);
        let mut solution_row = Vec::with_capacity(width);
        for column in 0..width {
            let index = row * width + column;
            let cell = body
                .cells
                .get(index)
                .ok_or(ImportError::MissingCell { index })?;

            if !cell.is_block() && !cell.has_supported_type() {
                let rendered = serde_json::to_string(cell)?;
                error!(row, column, cell = %rendered, "Unsupported cell type");
                return Err(ImportError::UnsupportedCellType {
                    row,
                    column,
                    cell: rendered,
                });
            }

            puzzle_row.push(puzzle_cell(cell));
            solution_row.push(match cell.answer.as_deref() {
                Some(answer) if !cell.is_block() => answer.to_string(),
                _ => BLOCK.to_string(),
            });
        }
        puzzle.push(puzzle_row);
        solution.push(solution_row);
    }

    debug!(rows = puzzle.len(), "Built puzzle and solution grids");
    Ok(Grids { puzzle, solution })
}

fn puzzle_cell(cell: &source::Cell) -> PuzzleCell {
    let symbol = if cell.is_block() {
        BLOCK.to_string()
    } else {
        cell.start_label().unwrap_or(EMPTY).to_string()
    };

    let circled = cell.is_circled();
    let highlighted = cell.is_highlighted();
    if !circled && !highlighted {
        return PuzzleCell::Bare(symbol);
    }

    PuzzleCell::Styled {
        cell: symbol,
        style: CellStyle {
            shapebg: circled.then(|| SHAPE_CIRCLE.to_string()),
            highlight: highlighted.then_some(true),
        },
    }
}

/// Splits clues into Across and Down, keeping source order.
///
/// Any direction other than `"Across"` is treated as Down.
pub fn transform_clues(source_clues: &[source::Clue]) -> Result<Clues, ImportError> {
    let mut clues = Clues::default();

    for source_clue in source_clues {
        if source_clue.label.is_empty() {
            error!(direction = %source_clue.direction, "Clue has no label");
            return Err(ImportError::ClueFormat {
                label: String::new(),
                detail: "missing label".to_string(),
            });
        }

        let plain = match source_clue.text.as_slice() {
            [text] => text.plain.as_deref().filter(|p| !p.is_empty()),
            _ => None,
        };
        let Some(plain) = plain else {
            let detail = format!(
                "{} text element(s), expected one with plain text",
                source_clue.text.len()
            );
            error!(label = %source_clue.label, %detail, "Unknown clue text format");
            return Err(ImportError::ClueFormat {
                label: source_clue.label.clone(),
                detail,
            });
        };

        let formatted = Clue {
            number: source_clue.label.clone(),
            clue: plain.to_string(),
        };
        if source_clue.direction == ACROSS {
            clues.across.push(formatted);
        } else {
            clues.down.push(formatted);
        }
    }

    Ok(clues)
}

pub fn assemble_document(
    response: &PuzzleResponse,
    body: &PuzzleBody,
    grids: Grids,
    clues: Clues,
    title: &str,
) -> IpuzDocument {
    let author = if response.constructors.is_empty() {
        None
    } else {
        Some(response.constructors.join(AUTHOR_SEPARATOR))
    };

    IpuzDocument {
        version: IPUZ_VERSION.to_string(),
        kind: vec![IPUZ_KIND_CROSSWORD.to_string()],
        dimensions: body.dimensions,
        clues,
        puzzle: grids.puzzle,
        solution: grids.solution,
        title: title.to_string(),
        copyright: response.copyright.clone(),
        url: response
            .related_content
            .as_ref()
            .and_then(|related| related.url.clone()),
        editor: response.editor.clone(),
        author,
        date: response.publication_date.clone(),
    }
}
