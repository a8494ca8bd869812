use std::fmt;

pub struct Output(String);

impl Output {
    pub fn new() -> Self {
        Output(String::new())
    }

    pub fn write_fmt(&mut self, arguments: fmt::Arguments) {
        fmt::Write::write_fmt(&mut self.0, arguments).unwrap();
    }

    pub fn write_words(&mut self, indent: &str, words: &[u32], per_line: usize) {
        for line in words.chunks(per_line) {
            write!(self, "{}", indent);
            for word in line {
                write!(self, " 0x{:08X},", word);
            }
            writeln!(self);
        }
    }
}

impl AsRef<[u8]> for Output {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}
