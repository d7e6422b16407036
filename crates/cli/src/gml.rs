//! Minimal GML reader/writer for oriented point sets.
//!
//! Reads the subset graph editors emit for plain point layouts:
//! `graph [ node [ id N label "s" graphics [ x X y Y ] ] edge [ ... ] ]`.
//! A node's heading comes from `heading` on the node or inside `graphics`
//! (radians, default 0). Edges are counted and otherwise ignored; the tour
//! graph is complete.

use std::collections::HashSet;
use std::fmt::Write as _;

use anyhow::{anyhow, bail, Context, Result};
use dubins_tsp::pose::Configuration;
use dubins_tsp::tour::Site;

/// One vertex of the input graph.
#[derive(Clone, Debug, PartialEq)]
pub struct GmlNode {
    pub id: i64,
    pub label: Option<String>,
    pub configuration: Configuration,
}

impl Site for GmlNode {
    type Id = i64;
    fn id(&self) -> i64 {
        self.id
    }
    fn configuration(&self) -> Configuration {
        self.configuration
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GmlGraph {
    pub nodes: Vec<GmlNode>,
    pub edge_count: usize,
}

#[derive(Clone, Debug, PartialEq)]
enum Value {
    Int(i64),
    Real(f64),
    Str(String),
    List(Vec<(String, Value)>),
}

impl Value {
    fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Int(i) => Some(i as f64),
            Value::Real(r) => Some(r),
            _ => None,
        }
    }
}

fn lookup<'v>(list: &'v [(String, Value)], key: &str) -> Option<&'v Value> {
    list.iter().find(|(k, _)| k == key).map(|(_, v)| v)
}

#[derive(Clone, Debug, PartialEq)]
enum Token {
    Open,
    Close,
    Str(String),
    Word(String),
}

fn tokenize(text: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();
    while let Some(&(pos, c)) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '#' => {
                while let Some((_, c)) = chars.next() {
                    if c == '\n' {
                        break;
                    }
                }
            }
            '[' => {
                chars.next();
                tokens.push(Token::Open);
            }
            ']' => {
                chars.next();
                tokens.push(Token::Close);
            }
            '"' => {
                chars.next();
                let mut s = String::new();
                loop {
                    match chars.next() {
                        Some((_, '"')) => break,
                        Some((_, c)) => s.push(c),
                        None => bail!("unterminated string starting at byte {pos}"),
                    }
                }
                tokens.push(Token::Str(s));
            }
            _ => {
                let mut s = String::new();
                while let Some(&(_, c)) = chars.peek() {
                    if c.is_whitespace() || c == '[' || c == ']' || c == '"' {
                        break;
                    }
                    s.push(c);
                    chars.next();
                }
                tokens.push(Token::Word(s));
            }
        }
    }
    Ok(tokens)
}

fn parse_list(tokens: &[Token], pos: &mut usize, nested: bool) -> Result<Vec<(String, Value)>> {
    let mut out = Vec::new();
    loop {
        match tokens.get(*pos) {
            None if nested => bail!("missing ']'"),
            None => return Ok(out),
            Some(Token::Close) if nested => {
                *pos += 1;
                return Ok(out);
            }
            Some(Token::Word(key)) => {
                *pos += 1;
                let value = match tokens.get(*pos) {
                    Some(Token::Open) => {
                        *pos += 1;
                        Value::List(parse_list(tokens, pos, true)?)
                    }
                    Some(Token::Str(s)) => {
                        *pos += 1;
                        Value::Str(s.clone())
                    }
                    Some(Token::Word(w)) => {
                        *pos += 1;
                        parse_number(w).with_context(|| format!("value of '{key}'"))?
                    }
                    _ => bail!("key '{key}' has no value"),
                };
                out.push((key.clone(), value));
            }
            Some(other) => bail!("unexpected token {other:?}"),
        }
    }
}

fn parse_number(word: &str) -> Result<Value> {
    if let Ok(i) = word.parse::<i64>() {
        return Ok(Value::Int(i));
    }
    word.parse::<f64>()
        .map(Value::Real)
        .map_err(|_| anyhow!("'{word}' is not a number"))
}

/// Parse a GML document into nodes with poses.
pub fn parse_graph(text: &str) -> Result<GmlGraph> {
    let tokens = tokenize(text)?;
    let mut pos = 0;
    let top = parse_list(&tokens, &mut pos, false)?;
    let graph = match lookup(&top, "graph") {
        Some(Value::List(g)) => g,
        _ => bail!("no 'graph [ ... ]' block"),
    };

    let mut nodes = Vec::new();
    let mut seen = HashSet::new();
    let mut edge_count = 0;
    for (key, value) in graph {
        match (key.as_str(), value) {
            ("node", Value::List(attrs)) => {
                let node = parse_node(attrs).with_context(|| format!("node #{}", nodes.len()))?;
                if !seen.insert(node.id) {
                    bail!("duplicate node id {}", node.id);
                }
                nodes.push(node);
            }
            ("edge", Value::List(_)) => edge_count += 1,
            _ => {}
        }
    }
    Ok(GmlGraph { nodes, edge_count })
}

fn parse_node(attrs: &[(String, Value)]) -> Result<GmlNode> {
    let id = match lookup(attrs, "id") {
        Some(Value::Int(i)) => *i,
        Some(_) => bail!("'id' must be an integer"),
        None => bail!("missing 'id'"),
    };
    let label = match lookup(attrs, "label") {
        Some(Value::Str(s)) => Some(s.clone()),
        _ => None,
    };
    let graphics = match lookup(attrs, "graphics") {
        Some(Value::List(g)) => g.as_slice(),
        _ => bail!("node {id} has no 'graphics' block"),
    };
    let coord = |key: &str| {
        lookup(graphics, key)
            .and_then(Value::as_f64)
            .ok_or_else(|| anyhow!("node {id} has no numeric graphics.{key}"))
    };
    let x = coord("x")?;
    let y = coord("y")?;
    let heading = lookup(attrs, "heading")
        .or_else(|| lookup(graphics, "heading"))
        .map(|v| {
            v.as_f64()
                .ok_or_else(|| anyhow!("node {id} has a non-numeric heading"))
        })
        .transpose()?
        .unwrap_or(0.0);
    Ok(GmlNode {
        id,
        label,
        configuration: Configuration::new(x, y, heading),
    })
}

/// Serialize nodes (and optional directed edges by node id) as GML.
pub fn write_graph(nodes: &[GmlNode], edges: &[(i64, i64)]) -> String {
    let mut s = String::new();
    s.push_str("graph [\n  directed 1\n");
    for n in nodes {
        let q = n.configuration;
        let label = n.label.clone().unwrap_or_else(|| n.id.to_string());
        // writing into a String cannot fail
        let _ = write!(
            s,
            "  node [\n    id {}\n    label \"{}\"\n    heading {}\n    graphics [\n      x {}\n      y {}\n    ]\n  ]\n",
            n.id,
            label,
            q.heading,
            q.x(),
            q.y()
        );
    }
    for (source, target) in edges {
        let _ = write!(
            s,
            "  edge [\n    source {source}\n    target {target}\n  ]\n"
        );
    }
    s.push_str("]\n");
    s
}
