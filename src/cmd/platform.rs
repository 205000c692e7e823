/// Execution platform distinction governing path separators, env-var
/// syntax, and the executable suffix. Determined once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Posix,
    Windows,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Posix
        }
    }

    pub fn separator(self) -> char {
        match self {
            Platform::Posix => '/',
            Platform::Windows => '\\',
        }
    }

    /// hammer ships as a plain script on posix and a batch file on windows.
    pub fn exe_suffix(self) -> &'static str {
        match self {
            Platform::Posix => "",
            Platform::Windows => ".bat",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separator_per_platform() {
        assert_eq!(Platform::Posix.separator(), '/');
        assert_eq!(Platform::Windows.separator(), '\\');
    }

    #[test]
    fn suffix_per_platform() {
        assert_eq!(Platform::Posix.exe_suffix(), "");
        assert_eq!(Platform::Windows.exe_suffix(), ".bat");
    }
}
