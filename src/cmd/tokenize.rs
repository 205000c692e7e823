/// Split a command line into argv tokens.
///
/// Two states: normal and inside-quote. Double or single quotes group
/// whitespace into a single token and are stripped from the token content.
/// No escape processing; paths with spaces only need plain quoting.
pub fn tokenize(command_line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;

    for c in command_line.chars() {
        match quote {
            Some(q) => {
                if c == q {
                    quote = None;
                } else {
                    current.push(c);
                }
            }
            None => {
                if c == '"' || c == '\'' {
                    quote = Some(c);
                    in_token = true;
                } else if c.is_whitespace() {
                    if in_token {
                        tokens.push(std::mem::take(&mut current));
                        in_token = false;
                    }
                } else {
                    current.push(c);
                    in_token = true;
                }
            }
        }
    }
    // An unterminated quote still yields its partial token.
    if in_token {
        tokens.push(current);
    }
    tokens
}
