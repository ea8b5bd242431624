//! Karnaugh maps: Gray-code ordered grids of truth vectors and their maximal areas.

use crate::tools::{gray_code, powers_of_two, to_binary, variable_count, wrap};
use crate::variable::{check_variables, label};
use crate::*;

use bit_set::BitSet;
use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static RE_SPLIT_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([A-Za-z]*)\s*\\\s*([A-Za-z]*)\s*$").unwrap());
static RE_PLAIN_HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*([A-Za-z]+)\s*$").unwrap());

/// A Karnaugh map.
///
/// The first half of the variables (rounded down) is placed on the rows and the others on the columns.
/// Both axes follow the Gray code: neighbouring rows and columns, including the last and first ones,
/// differ by the value of a single variable.
///
/// Coordinates wrap around both axes: the grid is a torus.
///
/// ```
/// use boolmin::{build, parse};
/// # use boolmin::BoolminError;
/// # fn main() -> Result<(), BoolminError> {
///
/// let grid = build(&parse("x ∧ ¬y ∨ z")?)?;
/// assert_eq!(grid.corner(), "x\\yz");
/// assert_eq!(grid.col_labels(), &["00", "01", "11", "10"]);
/// assert!(grid.cell_at(1, 0));
/// assert!(grid.cell_at(1, 4));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    corner: String,
    row_bits: usize,
    col_bits: usize,
    row_labels: Vec<String>,
    col_labels: Vec<String>,
    cells: Vec<bool>,
}

/// A rectangle of a [Grid], possibly wrapping around its borders
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Area {
    pub start_row: usize,
    pub start_col: usize,
    pub height: usize,
    pub width: usize,
}

/// A milestone in the construction of a Karnaugh map
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub description: String,
    pub table: Vec<Vec<String>>,
}

fn gray_labels(bits: usize) -> Vec<String> {
    (0..1usize << bits)
        .map(|i| to_binary(gray_code(i), bits))
        .collect()
}

impl Grid {
    /// Lay out a truth vector with 2, 3 or 4 named variables
    pub fn from_vector(vector: &TruthVector) -> Result<Self, BoolminError> {
        let count = vector.variable_count();
        if !(2..=4).contains(&count) {
            return Err(BoolminError::UnsupportedVariableCount(count));
        }
        if !vector.has_variables() {
            return Err(BoolminError::MissingVariables(vector.to_string()));
        }
        let variables = vector.variables();
        let row_bits = count / 2;
        let col_bits = count - row_bits;

        let mut grid = Self {
            corner: format!("{}\\{}", label(&variables[..row_bits]), label(&variables[row_bits..])),
            row_bits,
            col_bits,
            row_labels: gray_labels(row_bits),
            col_labels: gray_labels(col_bits),
            cells: vec![],
        };
        grid.cells = (0..grid.height())
            .flat_map(|r| (0..grid.width()).map(move |c| (r, c)))
            .map(|(r, c)| vector.values()[grid.assignment_index(r, c)])
            .collect();
        trace!("Grid {}:\n{}", grid.corner, grid);
        Ok(grid)
    }

    /// Create a grid from rows of ```0``` and ```1```.
    ///
    /// The corner header names the variables, for example ```w\xy```, it can be empty.
    /// Both dimensions must be powers of two.
    pub fn from_rows(corner: &str, rows: &[&str]) -> Result<Self, BoolminError> {
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        let row_bits = variable_count(rows.len())
            .ok_or_else(|| BoolminError::InvalidGrid(format!("{} rows", rows.len())))?;
        let col_bits = variable_count(width)
            .ok_or_else(|| BoolminError::InvalidGrid(format!("{} columns", width)))?;

        let mut cells = Vec::with_capacity(rows.len() * width);
        for row in rows {
            if row.chars().count() != width {
                return Err(BoolminError::InvalidGrid(format!("uneven row '{}'", row)));
            }
            for c in row.chars() {
                match c {
                    '0' => cells.push(false),
                    '1' => cells.push(true),
                    _ => return Err(BoolminError::InvalidGrid(format!("invalid cell '{}'", c))),
                }
            }
        }

        Ok(Self {
            corner: corner.to_string(),
            row_bits,
            col_bits,
            row_labels: gray_labels(row_bits),
            col_labels: gray_labels(col_bits),
            cells,
        })
    }

    /// The top-left header naming row and column variables
    pub fn corner(&self) -> &str {
        &self.corner
    }

    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    pub fn col_labels(&self) -> &[String] {
        &self.col_labels
    }

    pub fn height(&self) -> usize {
        self.row_labels.len()
    }

    pub fn width(&self) -> usize {
        self.col_labels.len()
    }

    /// Value of a cell, coordinates wrap around the grid
    pub fn cell_at(&self, row: usize, col: usize) -> bool {
        let (r, c) = wrap(row, col, self.height(), self.width());
        self.cells[r * self.width() + c]
    }

    /// Index in the truth vector of the assignment shown in a cell, coordinates wrap around the grid
    pub fn assignment_index(&self, row: usize, col: usize) -> usize {
        let (r, c) = wrap(row, col, self.height(), self.width());
        (gray_code(r) << self.col_bits) | gray_code(c)
    }

    /// Header row followed by one row per label, as displayed
    pub fn to_table(&self) -> Vec<Vec<String>> {
        let mut table = vec![self.header()];
        table.extend((0..self.height()).map(|r| self.table_row(r)));
        table
    }

    fn header(&self) -> Vec<String> {
        let mut header = vec![self.corner.clone()];
        header.extend(self.col_labels.iter().cloned());
        header
    }

    fn table_row(&self, row: usize) -> Vec<String> {
        let mut line = vec![self.row_labels[row].clone()];
        line.extend((0..self.width()).map(|c| (self.cell_at(row, c) as u8).to_string()));
        line
    }

    /// Bit mask of the cells of an area, if they all have the given value
    fn uniform_mask(&self, area: &Area, value: bool) -> Option<BitSet> {
        let mut mask = BitSet::with_capacity(self.cells.len());
        for (r, c) in area.covered_cells(self.height(), self.width()) {
            if self.cell_at(r, c) != value {
                return None;
            }
            mask.insert(r * self.width() + c);
        }
        Some(mask)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let pad = self.corner.chars().count().max(self.row_bits);
        for line in self.to_table() {
            let mut cols = line.iter();
            if let Some(first) = cols.next() {
                write!(f, "{:>pad$}", first, pad = pad)?;
            }
            for (label, value) in self.col_labels.iter().zip(cols) {
                write!(f, " {:>w$}", value, w = label.len())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Area {
    pub fn new(start_row: usize, start_col: usize, height: usize, width: usize) -> Self {
        Self {
            start_row,
            start_col,
            height,
            width,
        }
    }

    /// Coordinates of all cells of the area in a grid of the given dimensions
    ///
    /// ```
    /// use boolmin::Area;
    ///
    /// let area = Area::new(3, 3, 2, 1);
    /// assert_eq!(area.covered_cells(4, 4), vec![(3, 3), (0, 3)]);
    /// ```
    pub fn covered_cells(&self, rows: usize, cols: usize) -> Vec<(usize, usize)> {
        (0..self.height)
            .flat_map(|dr| (0..self.width).map(move |dc| (dr, dc)))
            .map(|(dr, dc)| wrap(self.start_row + dr, self.start_col + dc, rows, cols))
            .collect()
    }

    pub fn size(&self) -> usize {
        self.height * self.width
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}x{} at ({}, {})",
            self.height, self.width, self.start_row, self.start_col
        )
    }
}

/// Build the Karnaugh map of an expression, see [build_with]
pub fn build(node: &Node) -> Result<Grid, BoolminError> {
    build_with(node, &DEFAULT_NAMING)
}

/// Build the Karnaugh map of an expression with 2, 3 or 4 variables.
///
/// Unnamed truth vectors get their names from the given policy.
pub fn build_with(node: &Node, naming: &dyn NamingPolicy) -> Result<Grid, BoolminError> {
    Grid::from_vector(&build_vector_with(node, naming)?)
}

fn build_for(vector: &str, variables: &[char], count: usize) -> Result<Grid, BoolminError> {
    if variables.len() != count {
        return Err(BoolminError::VariableCount {
            expected: count,
            found: variables.len(),
        });
    }
    let vector: TruthVector = vector.parse()?;
    Grid::from_vector(&vector.with_variables(variables.to_vec())?)
}

/// Karnaugh map of a vector of length 4
///
/// ```
/// use boolmin::build_for_two_variables;
/// # use boolmin::BoolminError;
/// # fn main() -> Result<(), BoolminError> {
///
/// let table = build_for_two_variables("0110", &['x', 'y'])?.to_table();
/// assert_eq!(table[0], vec!["x\\y", "0", "1"]);
/// assert_eq!(table[1], vec!["0", "0", "1"]);
/// assert_eq!(table[2], vec!["1", "1", "0"]);
/// # Ok(())
/// # }
/// ```
pub fn build_for_two_variables(vector: &str, variables: &[char]) -> Result<Grid, BoolminError> {
    build_for(vector, variables, 2)
}

/// Karnaugh map of a vector of length 8, with one variable on the rows
pub fn build_for_three_variables(vector: &str, variables: &[char]) -> Result<Grid, BoolminError> {
    build_for(vector, variables, 3)
}

/// Karnaugh map of a vector of length 16, with two variables on each axis
pub fn build_for_four_variables(vector: &str, variables: &[char]) -> Result<Grid, BoolminError> {
    build_for(vector, variables, 4)
}

/// All maximal areas of cells set to 1, see [find_maximal_areas]
pub fn find_all_maximal_areas(grid: &Grid) -> Vec<Area> {
    find_maximal_areas(grid, true)
}

/// All maximal areas of cells set to 0, see [find_maximal_areas]
pub fn find_all_maximal_zero_areas(grid: &Grid) -> Vec<Area> {
    find_maximal_areas(grid, false)
}

/// Find all maximal areas of cells with the given value.
///
/// Candidate areas have power of two sides and can start anywhere, wrapping around the borders.
/// A side spanning the whole grid only starts at 0. Areas are searched from the largest to the
/// smallest: an area whose cells are all included in a previously found area is not maximal.
///
/// ```
/// use boolmin::{find_all_maximal_areas, Area, Grid};
/// # use boolmin::BoolminError;
/// # fn main() -> Result<(), BoolminError> {
///
/// let grid = Grid::from_rows("x\\y", &["11", "10"])?;
/// let areas = find_all_maximal_areas(&grid);
/// assert_eq!(areas, vec![Area::new(0, 0, 2, 1), Area::new(0, 0, 1, 2)]);
/// # Ok(())
/// # }
/// ```
pub fn find_maximal_areas(grid: &Grid, value: bool) -> Vec<Area> {
    let (rows, cols) = (grid.height(), grid.width());
    let mut found: Vec<(Area, BitSet)> = vec![];

    for height in powers_of_two(rows).rev() {
        for width in powers_of_two(cols).rev() {
            let row_starts = if height == rows { 1 } else { rows };
            let col_starts = if width == cols { 1 } else { cols };
            for r in 0..row_starts {
                for c in 0..col_starts {
                    let area = Area::new(r, c, height, width);
                    let mask = match grid.uniform_mask(&area, value) {
                        None => continue,
                        Some(mask) => mask,
                    };
                    if found.iter().any(|(_, m)| m.is_superset(&mask)) {
                        continue;
                    }
                    trace!("Maximal area {}", area);
                    found.push((area, mask));
                }
            }
        }
    }
    debug!("{} maximal areas of value {}", found.len(), value as u8);
    found.into_iter().map(|(area, _)| area).collect()
}

/// Extract the variables of a map from its corner header.
///
/// The header is either ```rows\cols``` (spaces allowed) or a plain run of letters.
/// Without a header, the default names are used for the number of variables given by
/// the dimensions of the grid.
///
/// ```
/// use boolmin::{get_variables_from_map, Grid};
/// # use boolmin::BoolminError;
/// # fn main() -> Result<(), BoolminError> {
///
/// let grid = Grid::from_rows("w\\xy", &["0110", "1100"])?;
/// assert_eq!(get_variables_from_map(&grid)?, vec!['w', 'x', 'y']);
///
/// let grid = Grid::from_rows("", &["0110"])?;
/// assert_eq!(get_variables_from_map(&grid)?, vec!['x', 'y']);
/// # Ok(())
/// # }
/// ```
pub fn get_variables_from_map(grid: &Grid) -> Result<Vec<char>, BoolminError> {
    let count = grid.row_bits + grid.col_bits;
    let corner = grid.corner();

    let names: Vec<char> = if let Some(cap) = RE_SPLIT_HEADER.captures(corner) {
        cap[1].chars().chain(cap[2].chars()).collect()
    } else if let Some(cap) = RE_PLAIN_HEADER.captures(corner) {
        cap[1].chars().collect()
    } else {
        vec![]
    };

    if names.is_empty() {
        return DEFAULT_NAMING.names(count);
    }
    if names.len() != count {
        return Err(BoolminError::VariableCount {
            expected: count,
            found: names.len(),
        });
    }
    check_variables(&names)?;
    Ok(names)
}

/// Replay the construction of the Karnaugh map of an expression.
///
/// The first step creates the header, then each row is added with its label and filled.
/// Each step carries the partial table.
///
/// ```
/// use boolmin::{build, build_steps, parse};
/// # use boolmin::BoolminError;
/// # fn main() -> Result<(), BoolminError> {
///
/// let steps = build_steps(&parse("0110")?)?;
/// assert_eq!(steps.len(), 5);
/// assert_eq!(steps[1].description, "Add the row for x = 0");
/// assert_eq!(steps[2].description, "Fill the cells for y: 0, 1 at x = 0");
/// assert_eq!(steps[4].table, build(&parse("0110")?)?.to_table());
/// # Ok(())
/// # }
/// ```
pub fn build_steps(node: &Node) -> Result<Vec<Step>, BoolminError> {
    let vector = build_vector(node)?;
    let grid = Grid::from_vector(&vector)?;
    let variables = vector.variables();
    let row_vars = label(&variables[..grid.row_bits]);
    let col_vars = label(&variables[grid.row_bits..]);

    let mut table = vec![grid.header()];
    let mut steps = vec![Step {
        description: "Create the table header".to_string(),
        table: table.clone(),
    }];

    for (r, row_label) in grid.row_labels().iter().enumerate() {
        table.push(vec![row_label.clone()]);
        steps.push(Step {
            description: format!("Add the row for {} = {}", row_vars, row_label),
            table: table.clone(),
        });

        if let Some(last) = table.last_mut() {
            *last = grid.table_row(r);
        }
        steps.push(Step {
            description: format!(
                "Fill the cells for {}: {} at {} = {}",
                col_vars,
                grid.col_labels().join(", "),
                row_vars,
                row_label
            ),
            table: table.clone(),
        });
    }
    debug!("{} construction steps", steps.len());
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use crate::*;

    fn table(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|r| r.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn two_variables() -> Result<(), BoolminError> {
        let grid = build_for_two_variables("0110", &['x', 'y'])?;
        assert_eq!(
            grid.to_table(),
            table(&[&["x\\y", "0", "1"], &["0", "0", "1"], &["1", "1", "0"]])
        );
        Ok(())
    }

    #[test]
    fn three_variables() -> Result<(), BoolminError> {
        let grid = build_for_three_variables("01101100", &['x', 'y', 'z'])?;
        assert_eq!(
            grid.to_table(),
            table(&[
                &["x\\yz", "00", "01", "11", "10"],
                &["0", "0", "1", "0", "1"],
                &["1", "1", "1", "0", "0"],
            ])
        );
        Ok(())
    }

    #[test]
    fn four_variables() -> Result<(), BoolminError> {
        let grid = build_for_four_variables("0110110011000011", &['w', 'x', 'y', 'z'])?;
        assert_eq!(
            grid.to_table(),
            table(&[
                &["wx\\yz", "00", "01", "11", "10"],
                &["00", "0", "1", "0", "1"],
                &["01", "1", "1", "0", "0"],
                &["11", "0", "0", "1", "1"],
                &["10", "1", "1", "0", "0"],
            ])
        );
        Ok(())
    }

    #[test]
    fn gray_adjacency() -> Result<(), BoolminError> {
        let grid = build_for_four_variables("0110110011000011", &['w', 'x', 'y', 'z'])?;
        for r in 0..4 {
            for c in 0..4 {
                let idx = grid.assignment_index(r, c);
                let down = grid.assignment_index(r + 1, c);
                let right = grid.assignment_index(r, c + 1);
                assert_eq!((idx ^ down).count_ones(), 1);
                assert_eq!((idx ^ right).count_ones(), 1);
            }
        }
        Ok(())
    }

    #[test]
    fn cells_match_the_vector() -> Result<(), BoolminError> {
        let expr = parse("(w → x) ∧ (y ↔ ¬z)")?;
        let vector = build_vector(&expr)?;
        let grid = build(&expr)?;
        for r in 0..grid.height() {
            for c in 0..grid.width() {
                assert_eq!(Some(grid.cell_at(r, c)), vector.value(grid.assignment_index(r, c)));
            }
        }
        Ok(())
    }

    #[test]
    fn unsupported_sizes() -> Result<(), BoolminError> {
        assert_eq!(build(&parse("01")?), Err(BoolminError::UnsupportedVariableCount(1)));
        assert_eq!(build(&parse("1")?), Err(BoolminError::UnsupportedVariableCount(0)));
        let five = "01".repeat(16);
        assert_eq!(build(&parse(&five)?), Err(BoolminError::UnsupportedVariableCount(5)));
        assert_eq!(
            build_for_three_variables("0110", &['x', 'y', 'z']),
            Err(BoolminError::VariableCount { expected: 2, found: 3 })
        );
        assert!(build_for_two_variables("0110", &['x']).is_err());
        Ok(())
    }

    #[test]
    fn maximal_areas() -> Result<(), BoolminError> {
        let grid = Grid::from_rows("x\\y", &["11", "10"])?;
        let areas = find_all_maximal_areas(&grid);
        assert_eq!(areas.len(), 2);
        assert!(areas.contains(&Area::new(0, 0, 1, 2)));
        assert!(areas.contains(&Area::new(0, 0, 2, 1)));
        Ok(())
    }

    #[test]
    fn maximal_zero_areas() -> Result<(), BoolminError> {
        let grid = Grid::from_rows("x\\y", &["01", "10"])?;
        let areas = find_all_maximal_zero_areas(&grid);
        assert_eq!(areas, vec![Area::new(0, 0, 1, 1), Area::new(1, 1, 1, 1)]);
        Ok(())
    }

    #[test]
    fn wrapping_areas() -> Result<(), BoolminError> {
        // the four corners form a single area
        let grid = Grid::from_rows("wx\\yz", &["1001", "0000", "0000", "1001"])?;
        assert_eq!(find_all_maximal_areas(&grid), vec![Area::new(3, 3, 2, 2)]);

        // full rows span the grid only once
        let grid = Grid::from_rows("x\\yz", &["1111", "0110"])?;
        assert_eq!(
            find_all_maximal_areas(&grid),
            vec![Area::new(0, 1, 2, 2), Area::new(0, 0, 1, 4)]
        );
        assert_eq!(find_all_maximal_zero_areas(&grid), vec![Area::new(1, 3, 1, 2)]);
        Ok(())
    }

    #[test]
    fn uniform_grids() -> Result<(), BoolminError> {
        let grid = Grid::from_rows("", &["1111", "1111"])?;
        assert_eq!(find_all_maximal_areas(&grid), vec![Area::new(0, 0, 2, 4)]);
        assert!(find_all_maximal_zero_areas(&grid).is_empty());
        Ok(())
    }

    #[test]
    fn covered_cells() {
        let area = Area::new(1, 1, 2, 2);
        assert_eq!(area.covered_cells(4, 4), vec![(1, 1), (1, 2), (2, 1), (2, 2)]);
        assert_eq!(area.size(), 4);
    }

    #[test]
    fn variables_from_header() -> Result<(), BoolminError> {
        let grid = Grid::from_rows("x \\ yz", &["0110", "1100"])?;
        assert_eq!(get_variables_from_map(&grid)?, vec!['x', 'y', 'z']);

        let grid = Grid::from_rows("wxyz", &["0110", "1100", "0000", "1111"])?;
        assert_eq!(get_variables_from_map(&grid)?, vec!['w', 'x', 'y', 'z']);

        let grid = Grid::from_rows("", &["01", "10"])?;
        assert_eq!(get_variables_from_map(&grid)?, vec!['x', 'y']);

        let grid = Grid::from_rows("x\\yz", &["01", "10"])?;
        assert!(get_variables_from_map(&grid).is_err());
        Ok(())
    }

    #[test]
    fn invalid_rows() {
        assert!(Grid::from_rows("", &[]).is_err());
        assert!(Grid::from_rows("", &["011"]).is_err());
        assert!(Grid::from_rows("", &["01", "1"]).is_err());
        assert!(Grid::from_rows("", &["01", "10", "11"]).is_err());
        assert!(Grid::from_rows("", &["0a"]).is_err());
    }

    #[test]
    fn steps() -> Result<(), BoolminError> {
        let expr = parse("0110")?;
        let steps = build_steps(&expr)?;
        let descriptions: Vec<&str> = steps.iter().map(|s| s.description.as_str()).collect();
        assert_eq!(
            descriptions,
            vec![
                "Create the table header",
                "Add the row for x = 0",
                "Fill the cells for y: 0, 1 at x = 0",
                "Add the row for x = 1",
                "Fill the cells for y: 0, 1 at x = 1",
            ]
        );
        assert_eq!(steps[0].table, table(&[&["x\\y", "0", "1"]]));
        assert_eq!(steps[1].table, table(&[&["x\\y", "0", "1"], &["0"]]));
        assert_eq!(steps[2].table, table(&[&["x\\y", "0", "1"], &["0", "0", "1"]]));
        Ok(())
    }

    #[test]
    fn steps_by_size() -> Result<(), BoolminError> {
        let three = build_steps(&parse("01101100")?)?;
        assert_eq!(three.len(), 5);
        assert!(three[0].description.contains("header"));
        assert_eq!(three[2].description, "Fill the cells for xy: 00, 01, 11, 10 at w = 0");

        let four = build_steps(&parse("0110110011000011")?)?;
        assert_eq!(four.len(), 9);
        assert_eq!(four[7].description, "Add the row for wx = 10");
        assert_eq!(
            four[8].table,
            build(&parse("0110110011000011")?)?.to_table()
        );
        Ok(())
    }

    #[test]
    fn display() -> Result<(), BoolminError> {
        let grid = build_for_two_variables("0001", &['a', 'b'])?;
        assert_eq!(grid.to_string(), "a\\b 0 1\n  0 0 0\n  1 0 1\n");
        Ok(())
    }
}
