//! Single-line commands against a [`Quadtree`].
//!
//! Grammar (tokens separated by spaces or tabs, action is case-insensitive):
//! ```text
//! command := action (int)*
//! insert x y width height
//! delete x y
//! find x y
//! update x y new_width new_height
//! dump
//! ```

use std::fmt;

use nom::{
    character::complete::{alpha1, i32 as integer, space0, space1},
    combinator::all_consuming,
    multi::many0,
    sequence::{preceded, terminated},
    IResult,
};

use crate::{ParseError, Quadtree, QuadtreeError, Rectangle};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Insert {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
    Delete {
        x: i32,
        y: i32,
    },
    Find {
        x: i32,
        y: i32,
    },
    Update {
        x: i32,
        y: i32,
        new_width: i32,
        new_height: i32,
    },
    Dump,
}

/// What a command did, rendered as the line(s) printed for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Inserted(Rectangle),
    Deleted {
        x: i32,
        y: i32,
        removed: Option<Rectangle>,
    },
    Found {
        x: i32,
        y: i32,
        rect: Option<Rectangle>,
    },
    Updated {
        x: i32,
        y: i32,
        rect: Option<Rectangle>,
    },
    Dump(String),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Insert { .. } => "insert",
            Command::Delete { .. } => "delete",
            Command::Find { .. } => "find",
            Command::Update { .. } => "update",
            Command::Dump => "dump",
        }
    }

    pub fn execute(&self, tree: &mut Quadtree) -> Result<Outcome, QuadtreeError> {
        let outcome = match *self {
            Command::Insert {
                x,
                y,
                width,
                height,
            } => {
                let rect = Rectangle::new(x, y, height, width);
                tree.insert(rect)?;
                Outcome::Inserted(rect)
            }
            Command::Delete { x, y } => Outcome::Deleted {
                x,
                y,
                removed: tree.delete(x, y),
            },
            Command::Find { x, y } => Outcome::Found {
                x,
                y,
                rect: tree.find(x, y).copied(),
            },
            Command::Update {
                x,
                y,
                new_width,
                new_height,
            } => Outcome::Updated {
                x,
                y,
                rect: tree.update(x, y, new_height, new_width),
            },
            Command::Dump => Outcome::Dump(tree.dump()),
        };
        Ok(outcome)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Insert {
                x,
                y,
                width,
                height,
            } => write!(f, "insert {} {} {} {}", x, y, width, height),
            Command::Delete { x, y } => write!(f, "delete {} {}", x, y),
            Command::Find { x, y } => write!(f, "find {} {}", x, y),
            Command::Update {
                x,
                y,
                new_width,
                new_height,
            } => write!(f, "update {} {} {} {}", x, y, new_width, new_height),
            Command::Dump => f.write_str("dump"),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Inserted(rect) => write!(f, "Inserted {}.", rect),
            Outcome::Deleted {
                x,
                y,
                removed: Some(_),
            } => write!(f, "Rectangle at ({}, {}) removed.", x, y),
            Outcome::Deleted { x, y, removed: None } => {
                write!(f, "No object found at {}, {} to delete.", x, y)
            }
            Outcome::Found {
                x,
                y,
                rect: Some(rect),
            } => write!(
                f,
                "Found rectangle at {}, {}: {}x{}",
                x, y, rect.width, rect.height
            ),
            Outcome::Found { x, y, rect: None } => write!(f, "No object found at {}, {}.", x, y),
            Outcome::Updated {
                x,
                y,
                rect: Some(rect),
            } => write!(
                f,
                "Updated rectangle at ({}, {}) to {}x{}.",
                x, y, rect.width, rect.height
            ),
            Outcome::Updated { x, y, rect: None } => {
                write!(f, "No object found at {}, {} to update.", x, y)
            }
            Outcome::Dump(text) => f.write_str(text.trim_end_matches('\n')),
        }
    }
}

fn action(input: &str) -> IResult<&str, &str> {
    preceded(space0, alpha1)(input)
}

fn arguments(input: &str) -> IResult<&str, Vec<i32>> {
    all_consuming(terminated(many0(preceded(space1, integer)), space0))(input)
}

/// Canonical name and argument count for a (lowercased) action.
fn signature(action: &str) -> Option<(&'static str, usize)> {
    match action {
        "insert" => Some(("insert", 4)),
        "delete" => Some(("delete", 2)),
        "find" => Some(("find", 2)),
        "update" => Some(("update", 4)),
        "dump" => Some(("dump", 0)),
        _ => None,
    }
}

/// Parse one sanitized command line.
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    if line.trim().is_empty() {
        return Err(ParseError::Empty);
    }
    let first_token = || line.split_whitespace().next().unwrap_or_default().to_string();

    let (rest, name) = action(line).map_err(|_| ParseError::UnknownCommand(first_token()))?;
    let (command, expected) = signature(&name.to_ascii_lowercase())
        .ok_or_else(|| ParseError::UnknownCommand(first_token()))?;

    let args = match arguments(rest) {
        Ok((_, args)) if args.len() == expected => args,
        _ => {
            return Err(ParseError::InvalidArguments {
                command,
                expected,
                line: line.trim().to_string(),
            })
        }
    };

    Ok(match (command, args.as_slice()) {
        ("insert", &[x, y, width, height]) => Command::Insert {
            x,
            y,
            width,
            height,
        },
        ("delete", &[x, y]) => Command::Delete { x, y },
        ("find", &[x, y]) => Command::Find { x, y },
        ("update", &[x, y, new_width, new_height]) => Command::Update {
            x,
            y,
            new_width,
            new_height,
        },
        _ => Command::Dump,
    })
}
