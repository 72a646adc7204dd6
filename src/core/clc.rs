//! OpenCL-C kernel signature scanning.
//!
//! Building a program in this runtime does not generate code; it tabulates
//! the `kernel` functions a source string declares so that entry points can
//! later be looked up by name and introspected. The scanner understands
//! just enough OpenCL-C to do that reliably: comments, string and character
//! literals, preprocessor lines, brace nesting, `__attribute__` clauses,
//! and parameter lists.
//!
//! Kernel declarations produced by macro expansion are not visible to the
//! scanner; the preprocessor is not run.

/// The source-level signature of one kernel entry point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KernelSignature {
    name: String,
    params: Vec<String>,
}

impl KernelSignature {
    /// Returns the kernel's declared name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of formal parameters the kernel declares.
    pub fn num_args(&self) -> u32 {
        self.params.len() as u32
    }

    /// Returns the raw text of each formal parameter declaration.
    pub fn params(&self) -> &[String] {
        &self.params
    }
}

/// A kernel signature scanner error.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum ClcError {
    #[error("unterminated block comment at offset {0}")]
    UnterminatedComment(usize),
    #[error("'kernel' qualifier at offset {0} is not followed by a function definition")]
    MalformedKernel(usize),
    #[error("kernel '{0}': unterminated parameter list")]
    UnterminatedParams(String),
}

/// Scans `src` and returns the signatures of every kernel it declares at
/// top level, in declaration order.
pub fn scan_kernels(src: &str) -> Result<Vec<KernelSignature>, ClcError> {
    let cleaned = blank_preprocessor_lines(&strip_comments(src)?);
    let chars: Vec<char> = cleaned.chars().collect();
    let mut signatures = Vec::new();
    let mut depth = 0usize;
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '{' => {
                depth += 1;
                i += 1;
            }
            '}' => {
                depth = depth.saturating_sub(1);
                i += 1;
            }
            '"' | '\'' => {
                i = skip_literal(&chars, i);
            }
            c if is_ident_start(c) => {
                let start = i;
                while i < chars.len() && is_ident_char(chars[i]) {
                    i += 1;
                }
                let word: String = chars[start..i].iter().collect();
                if depth == 0 && (word == "kernel" || word == "__kernel") {
                    let (sig, next) = parse_kernel_decl(&chars, i, start)?;
                    signatures.push(sig);
                    i = next;
                }
            }
            _ => i += 1,
        }
    }

    Ok(signatures)
}

/// Replaces comments with whitespace. Line comments end at the newline;
/// an unterminated block comment is an error. Comment markers inside
/// string and character literals are literal text, not comments.
fn strip_comments(src: &str) -> Result<String, ClcError> {
    let chars: Vec<char> = src.chars().collect();
    let mut out = String::with_capacity(src.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '"' || chars[i] == '\'' {
            let end = skip_literal(&chars, i);
            out.extend(chars[i..end].iter());
            i = end;
        } else if chars[i] == '/' && i + 1 < chars.len() && chars[i + 1] == '/' {
            while i < chars.len() && chars[i] != '\n' {
                i += 1;
            }
        } else if chars[i] == '/' && i + 1 < chars.len() && chars[i + 1] == '*' {
            let start = i;
            i += 2;
            loop {
                if i + 1 >= chars.len() {
                    return Err(ClcError::UnterminatedComment(start));
                }
                if chars[i] == '*' && chars[i + 1] == '/' {
                    i += 2;
                    break;
                }
                i += 1;
            }
            out.push(' ');
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }

    Ok(out)
}

/// Blanks lines whose first non-whitespace character is `#`, honoring the
/// `\` line continuation: a continued directive blanks its continuation
/// lines too.
fn blank_preprocessor_lines(src: &str) -> String {
    let mut continued = false;
    src.lines()
        .map(|line| {
            let blank = continued || line.trim_start().starts_with('#');
            continued = blank && line.trim_end().ends_with('\\');
            if blank { "" } else { line }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parses the remainder of a kernel declaration starting just past the
/// `kernel` qualifier at `i`. Returns the signature and the index just past
/// the closing parenthesis of the parameter list.
fn parse_kernel_decl(chars: &[char], mut i: usize, kw_pos: usize)
        -> Result<(KernelSignature, usize), ClcError> {
    loop {
        i = skip_whitespace(chars, i);
        if i >= chars.len() || !is_ident_start(chars[i]) {
            return Err(ClcError::MalformedKernel(kw_pos));
        }

        let start = i;
        while i < chars.len() && is_ident_char(chars[i]) {
            i += 1;
        }
        let word: String = chars[start..i].iter().collect();
        i = skip_whitespace(chars, i);

        if word == "__attribute__" {
            if i >= chars.len() || chars[i] != '(' {
                return Err(ClcError::MalformedKernel(kw_pos));
            }
            i = skip_balanced_parens(chars, i).ok_or(ClcError::MalformedKernel(kw_pos))?;
            continue;
        }

        if i < chars.len() && chars[i] == '(' {
            // `word` is the function name.
            let (params, next) = parse_params(chars, i, &word)?;
            return Ok((KernelSignature { name: word, params }, next));
        }

        // A return type or storage qualifier such as `void` or `static`;
        // keep reading until the name shows up.
    }
}

/// Splits the parameter list opening at `chars[i]` on top-level commas.
/// Returns the parameters and the index just past the closing parenthesis.
fn parse_params(chars: &[char], i: usize, name: &str)
        -> Result<(Vec<String>, usize), ClcError> {
    debug_assert_eq!(chars[i], '(');
    let mut depth = 1usize;
    let mut i = i + 1;
    let mut current = String::new();
    let mut params: Vec<String> = Vec::new();

    while i < chars.len() {
        let c = chars[i];
        match c {
            '(' | '[' => {
                depth += 1;
                current.push(c);
            }
            ']' => {
                depth = depth.saturating_sub(1);
                current.push(c);
            }
            ')' => {
                if depth <= 1 {
                    let last = current.trim().to_string();
                    if !last.is_empty() {
                        params.push(last);
                    }
                    if params.len() == 1 && params[0] == "void" {
                        params.clear();
                    }
                    return Ok((params, i + 1));
                }
                depth -= 1;
                current.push(c);
            }
            ',' if depth == 1 => {
                params.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
        i += 1;
    }

    Err(ClcError::UnterminatedParams(name.to_string()))
}

/// Skips a balanced parenthesized group opening at `chars[i]`. Returns the
/// index just past the matching close, or `None` if it never closes.
fn skip_balanced_parens(chars: &[char], i: usize) -> Option<usize> {
    debug_assert_eq!(chars[i], '(');
    let mut depth = 0usize;
    let mut i = i;
    while i < chars.len() {
        match chars[i] {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            '"' | '\'' => {
                i = skip_literal(chars, i);
                continue;
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// Skips a string or character literal opening at `chars[i]`, honoring
/// backslash escapes. Unterminated literals run to the end of input.
fn skip_literal(chars: &[char], i: usize) -> usize {
    let quote = chars[i];
    let mut i = i + 1;
    while i < chars.len() {
        if chars[i] == '\\' {
            i += 2;
        } else if chars[i] == quote {
            return i + 1;
        } else {
            i += 1;
        }
    }
    i
}

fn skip_whitespace(chars: &[char], mut i: usize) -> usize {
    while i < chars.len() && chars[i].is_whitespace() {
        i += 1;
    }
    i
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
