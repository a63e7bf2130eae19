// src/selection.rs

use crate::error::{DockboxError, Result};
use crate::model::Atom;

/// Water residue names treated as solvent.
const SOLVENT_RESN: &[&str] = &["HOH", "WAT", "DOD", "SOL", "H2O", "TIP3"];

/// Ion residues stripped before pocket autodetection (HETATM only).
const ION_RESN: &[&str] = &["PO4", "SO4", "ZN", "CA", "MG", "CL"];

/// Atom predicate tree for expressions like `hetatm & chain A`,
/// `resi 214+226+245` or `resi 234 + resn HEM`.
///
/// Operators: `&`/`and`, `|`/`or`, `!`/`not`, parentheses. A bare `+`
/// between two sub-expressions is an `or`, matching how residue lists are
/// written in docking papers.
#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    All,
    Hetatm,
    Solvent,
    Ions,
    Chain(String),
    /// Inclusive residue number ranges; single numbers are (n, n).
    Resi(Vec<(i32, i32)>),
    Resn(Vec<String>),
    Not(Box<Selection>),
    And(Box<Selection>, Box<Selection>),
    Or(Box<Selection>, Box<Selection>),
}

impl Selection {
    pub fn parse(text: &str) -> Result<Selection> {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return Err(err("empty selection"));
        }
        let mut parser = Parser { tokens, pos: 0 };
        let sel = parser.or_expr()?;
        if parser.pos != parser.tokens.len() {
            return Err(err(&format!(
                "unexpected trailing token {:?}",
                parser.tokens[parser.pos]
            )));
        }
        Ok(sel)
    }

    pub fn matches(&self, atom: &Atom) -> bool {
        match self {
            Selection::All => true,
            Selection::Hetatm => atom.hetatm,
            Selection::Solvent => SOLVENT_RESN.contains(&atom.res_name.to_uppercase().as_str()),
            Selection::Ions => {
                atom.hetatm && ION_RESN.contains(&atom.res_name.to_uppercase().as_str())
            }
            Selection::Chain(id) => atom.chain.eq_ignore_ascii_case(id),
            Selection::Resi(ranges) => ranges
                .iter()
                .any(|&(lo, hi)| atom.res_seq >= lo && atom.res_seq <= hi),
            Selection::Resn(names) => names
                .iter()
                .any(|n| n.eq_ignore_ascii_case(&atom.res_name)),
            Selection::Not(inner) => !inner.matches(atom),
            Selection::And(a, b) => a.matches(atom) && b.matches(atom),
            Selection::Or(a, b) => a.matches(atom) || b.matches(atom),
        }
    }
}

impl std::fmt::Display for Selection {
    /// Canonical text form, used in logs and empty-selection errors.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn paren(sel: &Selection) -> String {
            match sel {
                Selection::And(..) | Selection::Or(..) => format!("({})", sel),
                _ => sel.to_string(),
            }
        }
        match self {
            Selection::All => write!(f, "all"),
            Selection::Hetatm => write!(f, "hetatm"),
            Selection::Solvent => write!(f, "solvent"),
            Selection::Ions => write!(f, "ions"),
            Selection::Chain(id) => write!(f, "chain {}", id),
            Selection::Resi(ranges) => {
                let items: Vec<String> = ranges
                    .iter()
                    .map(|&(lo, hi)| {
                        if lo == hi {
                            lo.to_string()
                        } else {
                            format!("{}-{}", lo, hi)
                        }
                    })
                    .collect();
                write!(f, "resi {}", items.join("+"))
            }
            Selection::Resn(names) => write!(f, "resn {}", names.join("+")),
            Selection::Not(inner) => write!(f, "!{}", paren(inner)),
            Selection::And(a, b) => write!(f, "{} & {}", paren(a), paren(b)),
            Selection::Or(a, b) => write!(f, "{} | {}", paren(a), paren(b)),
        }
    }
}

fn err(message: &str) -> DockboxError {
    DockboxError::Selection {
        message: message.to_string(),
    }
}

/// Splits on whitespace, breaking out `( ) & | !` even when glued to words.
/// `+` stays attached so residue lists survive as single tokens; a lone `+`
/// becomes an operator token.
fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    for c in text.chars() {
        match c {
            '(' | ')' | '&' | '|' | '!' => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
                tokens.push(c.to_string());
            }
            c if c.is_whitespace() => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(c),
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

struct Parser {
    tokens: Vec<String>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&str> {
        self.tokens.get(self.pos).map(|s| s.as_str())
    }

    fn next(&mut self) -> Option<&str> {
        let t = self.tokens.get(self.pos).map(|s| s.as_str());
        if t.is_some() {
            self.pos += 1;
        }
        t
    }

    fn or_expr(&mut self) -> Result<Selection> {
        let mut left = self.and_expr()?;
        while let Some(t) = self.peek() {
            let lower = t.to_lowercase();
            if lower == "|" || lower == "or" || lower == "+" {
                self.pos += 1;
                let right = self.and_expr()?;
                left = Selection::Or(Box::new(left), Box::new(right));
            } else {
                break;
            }
        }
        Ok(left)
    }

    fn and_expr(&mut self) -> Result<Selection> {
        let mut left = self.unary()?;
        while let Some(t) = self.peek() {
            let lower = t.to_lowercase();
            if lower == "&" || lower == "and" {
                self.pos += 1;
                let right = self.unary()?;
                left = Selection::And(Box::new(left), Box::new(right));
            } else {
                break;
            }
        }
        Ok(left)
    }

    fn unary(&mut self) -> Result<Selection> {
        match self.peek().map(|t| t.to_lowercase()) {
            Some(t) if t == "!" || t == "not" => {
                self.pos += 1;
                Ok(Selection::Not(Box::new(self.unary()?)))
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<Selection> {
        let token = self
            .next()
            .ok_or_else(|| err("expected selection term"))?
            .to_string();
        match token.to_lowercase().as_str() {
            "(" => {
                let inner = self.or_expr()?;
                match self.next() {
                    Some(")") => Ok(inner),
                    _ => Err(err("missing closing parenthesis")),
                }
            }
            "all" | "*" => Ok(Selection::All),
            "hetatm" => Ok(Selection::Hetatm),
            "solvent" => Ok(Selection::Solvent),
            "ions" => Ok(Selection::Ions),
            "chain" => {
                let id = self
                    .next()
                    .ok_or_else(|| err("chain needs an identifier"))?;
                Ok(Selection::Chain(id.to_string()))
            }
            "resi" => {
                let list = self.next().ok_or_else(|| err("resi needs a list"))?;
                Ok(Selection::Resi(parse_resi_list(list)?))
            }
            "resn" => {
                let list = self.next().ok_or_else(|| err("resn needs a list"))?;
                let names = list.split('+').map(|s| s.to_uppercase()).collect();
                Ok(Selection::Resn(names))
            }
            _ => Err(err(&format!("unknown selection term {:?}", token))),
        }
    }
}

/// `214+226+245` or `10-20+30` into inclusive ranges.
fn parse_resi_list(list: &str) -> Result<Vec<(i32, i32)>> {
    let mut ranges = Vec::new();
    for item in list.split('+') {
        if item.is_empty() {
            return Err(err(&format!("bad residue list {:?}", list)));
        }
        // A dash after the first character is a range separator, so
        // negative residue numbers still parse. char_indices keeps the
        // split on a char boundary for non-ASCII garbage.
        let dash = item
            .char_indices()
            .skip(1)
            .find(|&(_, c)| c == '-')
            .map(|(i, _)| i);
        if let Some(dash) = dash {
            let lo: i32 = item[..dash]
                .parse()
                .map_err(|_| err(&format!("bad residue number {:?}", item)))?;
            let hi: i32 = item[dash + 1..]
                .parse()
                .map_err(|_| err(&format!("bad residue number {:?}", item)))?;
            ranges.push((lo, hi));
        } else {
            let n: i32 = item
                .parse()
                .map_err(|_| err(&format!("bad residue number {:?}", item)))?;
            ranges.push((n, n));
        }
    }
    Ok(ranges)
}
