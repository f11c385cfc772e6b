/*!
# Scanner core

Упорядоченные правила и стек режимов. В каждой позиции пробуются правила
верхнего режима по порядку, первое совпавшее побеждает. Если ничего не
совпало, режим выдаёт токен ошибки (один символ или остаток строки) и
сканирование продолжается.

Гарантии:
- токены покрывают текст без пропусков и пересечений;
- каждый шаг либо продвигает позицию, либо меняет стек, а серия
  переходов без продвижения ограничена `MAX_IDLE_STEPS`;
- глубина стека ограничена `MAX_DEPTH`.
*/

use std::collections::VecDeque;

use regex::{Captures, Regex, RegexBuilder};

use super::modes::{mode_table, ModeId};
use super::token::{Token, TokenKind};

const MAX_DEPTH: usize = 64;
const MAX_IDLE_STEPS: usize = 16;

/// Match-time callback. Must not emit anything before returning `Reject`.
pub(crate) type Callback = fn(&mut Scan<'_>, &Captures<'_>) -> Flow;

/// Context check evaluated before the pattern: `(text, position) -> allowed`
pub(crate) type Guard = fn(&str, usize) -> bool;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Transition {
    Stay,
    Push(ModeId),
    Pop,
    /// Jump to a sibling mode
    Replace(ModeId),
    /// Drop everything above the dialect root
    Reset,
}

pub(crate) enum Action {
    Emit(TokenKind),
    /// One category per capture group, unmatched groups are skipped
    Groups(&'static [TokenKind]),
    Call(Callback),
    /// Zero-length transition
    Nothing,
}

pub(crate) enum Flow {
    /// Consumed up to the offset, rule transition applies
    Done(usize),
    Goto(usize, Transition),
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Fallback {
    Char,
    Line,
}

pub(crate) struct Rule {
    pattern: Regex,
    action: Action,
    transition: Transition,
    guard: Option<Guard>,
}

impl Rule {
    /// Built-in patterns are anchored at the cursor and case-insensitive.
    pub(crate) fn new(pattern: &str, action: Action) -> Self {
        let anchored = format!(r"\A(?:{pattern})");
        let pattern = RegexBuilder::new(&anchored)
            .case_insensitive(true)
            .build()
            .unwrap_or_else(|e| panic!("invalid built-in lexer pattern {anchored:?}: {e}"));
        Self {
            pattern,
            action,
            transition: Transition::Stay,
            guard: None,
        }
    }

    pub(crate) fn then(mut self, transition: Transition) -> Self {
        self.transition = transition;
        self
    }

    pub(crate) fn when(mut self, guard: Guard) -> Self {
        self.guard = Some(guard);
        self
    }
}

pub(crate) struct Mode {
    pub(crate) id: ModeId,
    pub(crate) rules: Vec<Rule>,
    pub(crate) fallback: Fallback,
}

impl Mode {
    pub(crate) fn new(id: ModeId, rules: Vec<Rule>) -> Self {
        Self {
            id,
            rules,
            fallback: Fallback::Char,
        }
    }

    pub(crate) fn with_fallback(mut self, fallback: Fallback) -> Self {
        self.fallback = fallback;
        self
    }
}

/// Scanning state over one text: cursor, mode stack and pending tokens
pub(crate) struct Scan<'t> {
    pub(crate) text: &'t str,
    pub(crate) pos: usize,
    stack: Vec<ModeId>,
    /// End of the last emitted token
    emitted: usize,
    idle: usize,
    pending: VecDeque<Token>,
}

impl<'t> Scan<'t> {
    pub(crate) fn new(text: &'t str, root: ModeId) -> Self {
        Self {
            text,
            pos: 0,
            stack: vec![root],
            emitted: 0,
            idle: 0,
            pending: VecDeque::new(),
        }
    }

    fn mode(&self) -> ModeId {
        // Стек никогда не пустеет: корень не снимается
        self.stack[self.stack.len() - 1]
    }

    /// Queues a token. Spans already covered are clipped and gaps before
    /// `start` become error tokens, so coverage holds whatever callbacks do.
    pub(crate) fn emit(&mut self, start: usize, end: usize, kind: TokenKind) {
        let start = start.max(self.emitted);
        if start >= end {
            return;
        }
        if start > self.emitted {
            tracing::debug!(from = self.emitted, to = start, "uncovered span filled with error");
            self.push_token(self.emitted, start, TokenKind::Error);
        }
        self.push_token(start, end, kind);
    }

    fn push_token(&mut self, start: usize, end: usize, kind: TokenKind) {
        self.pending
            .push_back(Token::new(kind, start, &self.text[start..end]));
        self.emitted = end;
    }

    /// Absolute span of the whole match
    pub(crate) fn matched(&self, caps: &Captures<'_>) -> (usize, usize) {
        caps.get(0)
            .map_or((self.pos, self.pos), |m| (self.pos + m.start(), self.pos + m.end()))
    }

    /// Absolute span of a capture group
    pub(crate) fn group(&self, caps: &Captures<'_>, index: usize) -> Option<(usize, usize)> {
        caps.get(index)
            .map(|m| (self.pos + m.start(), self.pos + m.end()))
    }

    /// Emits groups `1..` of `caps` with the given categories
    pub(crate) fn emit_groups(&mut self, caps: &Captures<'_>, kinds: &[TokenKind]) {
        for (index, kind) in kinds.iter().enumerate() {
            if let Some((start, end)) = self.group(caps, index + 1) {
                self.emit(start, end, *kind);
            }
        }
    }

    /// Scans `text[start..end]` with a fresh scanner rooted at `root`
    /// and re-emits its tokens at absolute offsets.
    pub(crate) fn delegate(&mut self, start: usize, end: usize, root: ModeId) {
        let text = self.text;
        let mut inner = Scan::new(&text[start..end], root);
        while let Some(token) = inner.next_token() {
            self.emit(start + token.start, start + token.end, token.kind);
        }
    }

    pub(crate) fn next_token(&mut self) -> Option<Token> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(token);
            }
            if !self.step() {
                return None;
            }
        }
    }

    /// Runs one rule (or the fallback). Returns false at end of input.
    fn step(&mut self) -> bool {
        let text = self.text;
        if self.pos >= text.len() {
            return false;
        }
        let mode = mode_table(self.mode());
        let rest = &text[self.pos..];

        if self.idle < MAX_IDLE_STEPS {
            for rule in &mode.rules {
                if let Some(guard) = rule.guard {
                    if !guard(text, self.pos) {
                        continue;
                    }
                }
                let Some(caps) = rule.pattern.captures(rest) else {
                    continue;
                };
                let (_, matched_end) = self.matched(&caps);
                let flow = match rule.action {
                    Action::Emit(kind) => {
                        self.emit(self.pos, matched_end, kind);
                        Flow::Done(matched_end)
                    }
                    Action::Groups(kinds) => {
                        self.emit_groups(&caps, kinds);
                        Flow::Done(matched_end)
                    }
                    Action::Call(callback) => callback(self, &caps),
                    Action::Nothing => Flow::Done(matched_end),
                };
                let (end, transition) = match flow {
                    Flow::Done(end) => (end, rule.transition),
                    Flow::Goto(end, transition) => (end, transition),
                    Flow::Reject => continue,
                };
                if end <= self.pos && transition == Transition::Stay {
                    continue;
                }
                self.advance(end);
                self.apply(transition);
                return true;
            }
        } else {
            tracing::debug!(
                offset = self.pos,
                mode = ?mode.id,
                "too many transitions without progress, forcing fallback"
            );
        }

        let end = match mode.fallback {
            Fallback::Char => self.pos + rest.chars().next().map_or(1, char::len_utf8),
            Fallback::Line => match rest.find('\n') {
                Some(0) => self.pos + 1,
                Some(eol) => self.pos + eol,
                None => text.len(),
            },
        };
        self.emit(self.pos, end, TokenKind::Error);
        self.advance(end);
        true
    }

    fn advance(&mut self, end: usize) {
        if end > self.pos {
            if self.emitted < end {
                // Правило поглотило текст, но не выдало для него токенов
                self.emit(self.emitted, end, TokenKind::Error);
            }
            self.pos = end.max(self.emitted);
            self.idle = 0;
        } else {
            self.idle += 1;
        }
    }

    fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::Stay => {}
            Transition::Push(mode) => {
                if self.stack.len() < MAX_DEPTH {
                    tracing::trace!(offset = self.pos, ?mode, "push");
                    self.stack.push(mode);
                } else {
                    tracing::debug!(offset = self.pos, ?mode, "mode stack limit reached");
                }
            }
            Transition::Pop => {
                if self.stack.len() > 1 {
                    let mode = self.stack.pop();
                    tracing::trace!(offset = self.pos, ?mode, "pop");
                }
            }
            Transition::Replace(mode) => {
                if self.stack.len() > 1 {
                    let top = self.stack.len() - 1;
                    self.stack[top] = mode;
                } else {
                    self.stack.push(mode);
                }
                tracing::trace!(offset = self.pos, ?mode, "replace");
            }
            Transition::Reset => {
                tracing::trace!(offset = self.pos, depth = self.stack.len(), "reset");
                self.stack.truncate(1);
            }
        }
    }
}

/// Lazy token stream. Finite, and restartable by creating a new stream.
pub struct Tokens<'t> {
    scan: Scan<'t>,
}

impl<'t> Tokens<'t> {
    pub(crate) fn new(text: &'t str, root: ModeId) -> Self {
        Self {
            scan: Scan::new(text, root),
        }
    }
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.scan.next_token()
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}
