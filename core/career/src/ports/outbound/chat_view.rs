//! チャット表示面の Outbound ポート
//!
//! 1 行入力を受け取り、トランスクリプトを上から順に表示する。応答待ちの間は busy 表示を出す。

use crate::domain::Transcript;
use common::error::Error;

pub trait ChatView {
    /// セッション開始時の見出し・説明
    fn show_banner(&mut self) -> Result<(), Error>;

    /// トランスクリプト全体を表示する
    fn render(&mut self, transcript: &Transcript) -> Result<(), Error>;

    /// 応答待ち表示の on / off
    fn set_busy(&mut self, busy: bool) -> Result<(), Error>;

    /// 1 ターン分の入力。入力終端なら None
    fn read_input(&mut self) -> Result<Option<String>, Error>;

    /// セッション終了時の締めくくり（フッターなど）
    fn finish(&mut self) -> Result<(), Error>;
}
