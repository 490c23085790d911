// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Redacting argument serializer
//!
//! Turns the positional arguments of an action into one short, single-line
//! message. Composite values are described, never enumerated.

use crate::value::Value;
use std::fmt::{self, Write as _};

/// Placeholder for an object whose `id` property is present but unset
const UNKNOWN_ID: &str = "unknown";

/// Format an action name and its arguments as `"<action>: a, b, c"`
///
/// With no arguments the result is the bare action name.
pub fn concat_args(action: &str, args: &[Value]) -> String {
    if args.is_empty() {
        return action.to_string();
    }

    let mut message = String::with_capacity(action.len() + 2 + args.len() * 8);
    message.push_str(action);
    message.push_str(": ");
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            message.push_str(", ");
        }
        // Writing into a String cannot fail
        let _ = write!(message, "{}", arg);
    }
    message
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => f.write_str(if *b { "true" } else { "false" }),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
            Value::Str(s) => write_single_line(f, s),
            Value::List(items) => write!(f, "Array({})", items.len()),
            Value::Map(entries) => write!(f, "Array({})", entries.len()),
            Value::Object(obj) => match obj.id() {
                None => write!(f, "object({})", obj.type_name()),
                Some(Value::Null) => {
                    write!(f, "object({}) {{id: {}}}", obj.type_name(), UNKNOWN_ID)
                }
                Some(id) => write!(f, "object({}) {{id: {}}}", obj.type_name(), id),
            },
            Value::Enum { type_name, member } => write!(f, "enum({}::{})", type_name, member),
            Value::Closure(_) => f.write_str("closure"),
            Value::Resource { kind, id } => write!(f, "resource({}: {})", kind, id),
        }
    }
}

/// Strings are emitted verbatim except that line breaks become spaces
fn write_single_line(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    if !s.contains(['\n', '\r']) {
        return f.write_str(s);
    }
    for c in s.chars() {
        f.write_char(if c == '\n' || c == '\r' { ' ' } else { c })?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "serialize_tests.rs"]
mod tests;
