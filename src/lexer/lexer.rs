//! レキサーのメイン実装

use std::collections::VecDeque;

use logos::{Lexer as LogosLexer, Logos};

use super::token::TokenKind;
use crate::error::TokenizeResult;
use crate::source::{SourceToken, TokenSource};

/// レキサーの設定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerOptions {
    /// Columns a tab counts for when measuring indentation
    pub tab_width: usize,
    /// Whether INDENT/DEDENT tokens are produced
    pub emit_indentation: bool,
}

impl Default for LexerOptions {
    fn default() -> Self {
        Self {
            tab_width: 4,
            emit_indentation: true,
        }
    }
}

/// 行番号付きトークン
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexedToken {
    pub kind: TokenKind,
    pub text: String,
    /// 1始まりの行番号
    pub line: usize,
}

impl From<LexedToken> for SourceToken {
    fn from(token: LexedToken) -> Self {
        SourceToken::new(token.kind.as_i32(), token.text, token.line)
    }
}

/// Ahoy言語のレキサー
///
/// Wraps the logos scanner and adds the layout tokens: one NEWLINE per
/// non-blank line, and INDENT/DEDENT derived from leading whitespace.
pub struct Lexer<'a> {
    inner: LogosLexer<'a, TokenKind>,
    input: &'a str,
    options: LexerOptions,
    line: usize,
    line_start: usize,
    line_has_content: bool,
    indent_stack: Vec<usize>,
    pending: VecDeque<LexedToken>,
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// 新しいレキサーを作成
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, LexerOptions::default())
    }

    pub fn with_options(input: &'a str, options: LexerOptions) -> Self {
        Self {
            inner: TokenKind::lexer(input),
            input,
            options,
            line: 1,
            line_start: 0,
            line_has_content: false,
            indent_stack: vec![0],
            pending: VecDeque::new(),
            finished: false,
        }
    }

    fn push(&mut self, kind: TokenKind, text: impl Into<String>) {
        self.pending.push_back(LexedToken {
            kind,
            text: text.into(),
            line: self.line,
        });
    }

    /// 行頭の空白幅を計算
    fn indent_width(&self, end: usize) -> usize {
        self.input[self.line_start..end]
            .chars()
            .map(|ch| match ch {
                ' ' => 1,
                '\t' => self.options.tab_width,
                _ => 0,
            })
            .sum()
    }

    fn indent_to(&mut self, width: usize) {
        let top = self.indent_stack.last().copied().unwrap_or(0);
        if width > top {
            self.indent_stack.push(width);
            self.push(TokenKind::Indent, "");
            return;
        }
        while self.indent_stack.len() > 1
            && width < self.indent_stack.last().copied().unwrap_or(0)
        {
            self.indent_stack.pop();
            self.push(TokenKind::Dedent, "");
        }
        // 開いているレベルの間の幅は新しいブロックとして開き直す
        if width > self.indent_stack.last().copied().unwrap_or(0) {
            self.indent_stack.push(width);
            self.push(TokenKind::Indent, "");
        }
    }

    fn finish(&mut self) {
        self.finished = true;
        if self.options.emit_indentation {
            while self.indent_stack.len() > 1 {
                self.indent_stack.pop();
                self.push(TokenKind::Dedent, "");
            }
        }
    }

    fn scan(&mut self, result: Result<TokenKind, ()>) {
        let span = self.inner.span();
        let slice = self.inner.slice();

        if let Ok(TokenKind::Newline) = result {
            if self.line_has_content {
                self.push(TokenKind::Newline, "\n");
            }
            self.line += 1;
            self.line_start = span.end;
            self.line_has_content = false;
            return;
        }

        // 認識できない入力はILLEGALトークンとして返す
        let kind = result.unwrap_or(TokenKind::Illegal);

        if !self.line_has_content {
            self.line_has_content = true;
            if self.options.emit_indentation {
                let width = self.indent_width(span.start);
                self.indent_to(width);
            }
        }

        let text = match kind {
            TokenKind::String | TokenKind::Char => &slice[1..slice.len() - 1],
            _ => slice,
        };
        self.push(kind, text);

        // 複数行にまたがる文字列リテラル
        if let Some(last_newline) = slice.rfind('\n') {
            self.line += slice.matches('\n').count();
            self.line_start = span.start + last_newline + 1;
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = LexedToken;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(token);
            }
            if self.finished {
                return None;
            }
            match self.inner.next() {
                Some(result) => self.scan(result),
                None => self.finish(),
            }
        }
    }
}

/// ソースコードをトークン化
pub fn tokenize(input: &str) -> Vec<LexedToken> {
    Lexer::new(input).collect()
}

/// The default tokenizer behind the exported C entry points
#[derive(Debug, Clone, Copy, Default)]
pub struct AhoyLexer {
    options: LexerOptions,
}

impl AhoyLexer {
    pub fn new(options: LexerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> LexerOptions {
        self.options
    }
}

impl TokenSource for AhoyLexer {
    fn tokenize(&self, source: &str) -> TokenizeResult<Vec<SourceToken>> {
        Ok(Lexer::with_options(source, self.options)
            .map(SourceToken::from)
            .collect())
    }
}
