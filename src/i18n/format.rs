//! printf-style interpolation for translated templates.
//!
//! Translation files carry templates such as `"%d items in %s"`. Arguments
//! are supplied at render time as [`FormatArg`] values and consumed left to
//! right. Problems never fail the call; they are rendered inline instead:
//!
//! - missing argument: `%!d(MISSING)`
//! - wrong argument type: `%!d(string=text)`
//! - unused arguments: `%!(EXTRA int=1, string=x)`
//! - `%` at the end of the template: `%!(NOVERB)`

use std::fmt;

/// A dynamic argument for template interpolation.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatArg {
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
    Bool(bool),
}

impl FormatArg {
    /// Get the value as a count, if this is an integer argument.
    pub fn as_count(&self) -> Option<i128> {
        match self {
            FormatArg::Int(n) => Some(i128::from(*n)),
            FormatArg::UInt(n) => Some(i128::from(*n)),
            _ => None,
        }
    }

    fn type_name(&self) -> &'static str {
        match self {
            FormatArg::Int(_) => "int",
            FormatArg::UInt(_) => "uint",
            FormatArg::Float(_) => "float64",
            FormatArg::Str(_) => "string",
            FormatArg::Bool(_) => "bool",
        }
    }
}

impl fmt::Display for FormatArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatArg::Int(n) => write!(f, "{n}"),
            FormatArg::UInt(n) => write!(f, "{n}"),
            FormatArg::Float(n) => f.write_str(&go_float(*n)),
            FormatArg::Str(s) => f.write_str(s),
            FormatArg::Bool(b) => write!(f, "{b}"),
        }
    }
}

macro_rules! impl_from {
    ($variant:ident, $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for FormatArg {
                fn from(value: $source) -> Self {
                    FormatArg::$variant(<$target>::from(value))
                }
            }
        )+
    };
}

impl_from!(Int, i64: i8, i16, i32, i64);
impl_from!(UInt, u64: u8, u16, u32, u64);
impl_from!(Float, f64: f32, f64);
impl_from!(Bool, bool: bool);

impl From<usize> for FormatArg {
    fn from(value: usize) -> Self {
        FormatArg::UInt(value as u64)
    }
}

impl From<isize> for FormatArg {
    fn from(value: isize) -> Self {
        FormatArg::Int(value as i64)
    }
}

impl From<&str> for FormatArg {
    fn from(value: &str) -> Self {
        FormatArg::Str(value.to_string())
    }
}

impl From<String> for FormatArg {
    fn from(value: String) -> Self {
        FormatArg::Str(value)
    }
}

/// Interpolate `args` into `template`.
///
/// A directive is `%[flags][width][.precision]verb`.
///
/// Verbs: `%d` (integers), `%x` / `%X` (hex integers), `%s` (strings),
/// `%f` (floats, precision 6 by default), `%t` (booleans), `%v` (any value)
/// and `%%` (literal percent sign).
///
/// Flags: `-` pads on the right, `0` pads numbers with zeros, `+` always
/// prints a sign, and ` ` leaves a space where a plus sign would go.
/// Width counts characters, not bytes.
pub fn sprintf(template: &str, args: &[FormatArg]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut args_iter = args.iter();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        let mut spec = Spec::default();
        while let Some(flag) = chars.next_if(|&c| matches!(c, '-' | '+' | ' ' | '0')) {
            match flag {
                '-' => spec.left = true,
                '+' => spec.plus = true,
                ' ' => spec.space = true,
                _ => spec.zero = true,
            }
        }
        spec.width = read_number(&mut chars);
        if chars.next_if_eq(&'.').is_some() {
            spec.precision = Some(read_number(&mut chars).unwrap_or(0));
        }

        let Some(verb) = chars.next() else {
            out.push_str("%!(NOVERB)");
            break;
        };

        if verb == '%' {
            out.push('%');
            continue;
        }

        match args_iter.next() {
            Some(arg) => write_verb(&mut out, verb, &spec, arg),
            None => {
                out.push_str("%!");
                out.push(verb);
                out.push_str("(MISSING)");
            }
        }
    }

    let extra: Vec<String> = args_iter
        .map(|arg| format!("{}={}", arg.type_name(), arg))
        .collect();
    if !extra.is_empty() {
        out.push_str("%!(EXTRA ");
        out.push_str(&extra.join(", "));
        out.push(')');
    }

    out
}

#[derive(Debug, Default)]
struct Spec {
    left: bool,
    plus: bool,
    space: bool,
    zero: bool,
    width: Option<usize>,
    precision: Option<usize>,
}

fn read_number(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<usize> {
    let mut digits = String::new();
    while let Some(d) = chars.next_if(char::is_ascii_digit) {
        digits.push(d);
    }
    digits.parse().ok()
}

fn write_verb(out: &mut String, verb: char, spec: &Spec, arg: &FormatArg) {
    match (verb, arg) {
        ('d' | 'v', FormatArg::Int(_) | FormatArg::UInt(_)) => {
            pad_number(out, spec, &arg.to_string());
        }
        ('x', FormatArg::Int(n)) if *n < 0 => pad_number(out, spec, &format!("-{:x}", n.unsigned_abs())),
        ('X', FormatArg::Int(n)) if *n < 0 => pad_number(out, spec, &format!("-{:X}", n.unsigned_abs())),
        ('x', FormatArg::Int(n)) => pad_number(out, spec, &format!("{n:x}")),
        ('X', FormatArg::Int(n)) => pad_number(out, spec, &format!("{n:X}")),
        ('x', FormatArg::UInt(n)) => pad_number(out, spec, &format!("{n:x}")),
        ('X', FormatArg::UInt(n)) => pad_number(out, spec, &format!("{n:X}")),
        ('f', FormatArg::Float(n)) if !n.is_finite() => pad_number(out, spec, &go_float(*n)),
        ('f', FormatArg::Float(n)) => {
            pad_number(out, spec, &format!("{:.*}", spec.precision.unwrap_or(6), n));
        }
        ('v', FormatArg::Float(n)) => pad_number(out, spec, &go_float(*n)),
        ('s' | 'v', FormatArg::Str(s)) => {
            let text: String = match spec.precision {
                Some(max) => s.chars().take(max).collect(),
                None => s.clone(),
            };
            pad_text(out, spec, &text);
        }
        ('t' | 'v', FormatArg::Bool(b)) => pad_text(out, spec, &b.to_string()),
        _ => out.push_str(&format!("%!{}({}={})", verb, arg.type_name(), arg)),
    }
}

/// Pad a rendered number; zero padding goes between the sign and the digits.
fn pad_number(out: &mut String, spec: &Spec, rendered: &str) {
    let (sign, digits) = match rendered.chars().next() {
        Some(sign @ ('-' | '+')) => (sign.to_string(), &rendered[1..]),
        _ if spec.plus => ("+".to_string(), rendered),
        _ if spec.space => (" ".to_string(), rendered),
        _ => (String::new(), rendered),
    };

    let len = sign.len() + digits.chars().count();
    let fill = spec.width.unwrap_or(0).saturating_sub(len);

    if spec.left {
        out.push_str(&sign);
        out.push_str(digits);
        out.extend(std::iter::repeat(' ').take(fill));
    } else if spec.zero {
        out.push_str(&sign);
        out.extend(std::iter::repeat('0').take(fill));
        out.push_str(digits);
    } else {
        out.extend(std::iter::repeat(' ').take(fill));
        out.push_str(&sign);
        out.push_str(digits);
    }
}

fn pad_text(out: &mut String, spec: &Spec, text: &str) {
    let fill = spec.width.unwrap_or(0).saturating_sub(text.chars().count());
    let pad = if spec.zero && !spec.left { '0' } else { ' ' };

    if spec.left {
        out.push_str(text);
        out.extend(std::iter::repeat(' ').take(fill));
    } else {
        out.extend(std::iter::repeat(pad).take(fill));
        out.push_str(text);
    }
}

/// Shortest float text with an exponent below 1e-4 and from 1e21 up
/// (`1e+21`, `1.5e-07`), infinities as `+Inf` / `-Inf`.
fn go_float(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }

    let abs = n.abs();
    if abs == 0.0 || (1e-4..1e21).contains(&abs) {
        return n.to_string();
    }

    let scientific = format!("{n:e}");
    match scientific.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
        }
        None => scientific,
    }
}
