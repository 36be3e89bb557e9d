//! 端末向け ChatView 実装
//!
//! 端末では毎回画面を消してトランスクリプト全体を描き直す。
//! パイプ等の非端末出力では新しいターンだけを追記する。

use crate::domain::{Role, Transcript};
use crate::ports::outbound::ChatView;
use common::error::Error;
use std::io::{self, BufRead, IsTerminal, Write};

const TITLE: &str = "🎯 Career Guidance Chatbot";
const INTRO: &str = "Describe your **skills**, **interests**, and **education background**. Get personalized and practical career suggestions.";
const ABOUT: &str = "\
🧭 About This App
  This AI-powered chatbot helps you explore personalized career paths based on your skills, interests, and education.
  - Personalized AI career suggestions.
  - Up to 10 options with links.
  - Powered by Gemini for accuracy.
  - Unique for career guidance.
  🔗 Powered by [Gemini API](https://aistudio.google.com/)";
const INPUT_PLACEHOLDER: &str = "Describe your skills, interests, and education background...";
const BUSY: &str = "🤖 Brewing career magic... ✨";
const CAPTION: &str = "Powered by Gemini API";
const FOOTER: &str = "\
────────────────────────────────────────
💡 Tip: Ask again with different skills or interests to explore more career paths.
🌟 Unleash Your Career Potential with AI Magic! 🌟
Crafted with ❤️ for dreamers and achievers.";

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
const CLEAR_PREV_LINE: &str = "\x1b[1A\x1b[2K";

pub struct TerminalView<R, W> {
    input: R,
    output: W,
    /// true: 毎回全体を描き直す / false: 未表示のターンだけ追記
    redraw: bool,
    shown: usize,
}

impl<R: BufRead, W: Write> TerminalView<R, W> {
    pub fn new(input: R, output: W, redraw: bool) -> Self {
        Self {
            input,
            output,
            redraw,
            shown: 0,
        }
    }

    #[allow(dead_code)] // テストで使用
    pub fn output(&self) -> &W {
        &self.output
    }

    fn write_banner(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", TITLE)?;
        writeln!(self.output, "{}", INTRO)?;
        writeln!(self.output)?;
        writeln!(self.output, "{}", ABOUT)?;
        writeln!(self.output)
    }

    fn write_turns(&mut self, transcript: &Transcript, from: usize) -> io::Result<()> {
        for turn in transcript.turns().iter().skip(from) {
            match turn.role() {
                Role::User => {
                    writeln!(self.output, "🧑 You:")?;
                    writeln!(self.output, "{}", turn.content())?;
                }
                Role::Assistant => {
                    writeln!(self.output, "🤖 Assistant:")?;
                    writeln!(self.output, "{}", turn.content())?;
                    writeln!(self.output, "_{}_", CAPTION)?;
                }
            }
            writeln!(self.output)?;
        }
        Ok(())
    }

    fn write_render(&mut self, transcript: &Transcript) -> io::Result<()> {
        if self.redraw {
            write!(self.output, "{}", CLEAR_SCREEN)?;
            self.write_banner()?;
            self.write_turns(transcript, 0)?;
            writeln!(self.output, "{}", FOOTER)?;
        } else {
            self.write_turns(transcript, self.shown)?;
        }
        self.shown = transcript.len();
        self.output.flush()
    }
}

impl TerminalView<io::StdinLock<'static>, io::Stdout> {
    /// 標準入出力に接続する。stdout が端末なら描き直しモード。
    pub fn stdio() -> Self {
        let redraw = io::stdout().is_terminal();
        Self::new(io::stdin().lock(), io::stdout(), redraw)
    }
}

fn display_err(e: io::Error) -> Error {
    Error::io_msg(format!("Failed to write to terminal: {}", e))
}

impl<R: BufRead, W: Write> ChatView for TerminalView<R, W> {
    fn show_banner(&mut self) -> Result<(), Error> {
        if self.redraw {
            write!(self.output, "{}", CLEAR_SCREEN).map_err(display_err)?;
        }
        self.write_banner().map_err(display_err)?;
        self.output.flush().map_err(display_err)
    }

    fn render(&mut self, transcript: &Transcript) -> Result<(), Error> {
        self.write_render(transcript).map_err(display_err)
    }

    fn set_busy(&mut self, busy: bool) -> Result<(), Error> {
        if busy {
            writeln!(self.output, "{}", BUSY).map_err(display_err)?;
        } else if self.redraw {
            write!(self.output, "{}", CLEAR_PREV_LINE).map_err(display_err)?;
        }
        self.output.flush().map_err(display_err)
    }

    fn read_input(&mut self) -> Result<Option<String>, Error> {
        write!(self.output, "{}\n> ", INPUT_PLACEHOLDER).map_err(display_err)?;
        self.output.flush().map_err(display_err)?;
        let mut line = String::new();
        let n = self
            .input
            .read_line(&mut line)
            .map_err(|e| Error::io_msg(format!("Failed to read input: {}", e)))?;
        if n == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn finish(&mut self) -> Result<(), Error> {
        // 描き直しモードでは render のたびにフッターまで出している
        if !self.redraw {
            writeln!(self.output, "{}", FOOTER).map_err(display_err)?;
        }
        self.output.flush().map_err(display_err)
    }
}
