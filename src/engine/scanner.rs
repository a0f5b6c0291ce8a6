//! Leftmost-first scanner
//!
//! At every step the scanner searches, from the cursor, for the earliest match
//! among the current rule's terminators:
//!
//! ```text
//! child begins (descriptor order) → own end → enclosing ends → illegal
//! ```
//!
//! Ties at the same offset go to the terminator listed first. Text between
//! terminators is split into words and classified with the scope's keywords.
//!
//! A nested rule that meets its illegal pattern, runs out of input, or nests
//! too deep is abandoned: its events are discarded, the cursor stays where it
//! was, and that rule is not tried again at the same offset.
//!
//! Every pattern search goes through a [`MatchCache`]. A search from offset
//! `n` that found a match at `m` (or nothing) answers every later search from
//! `n..=m` as well, so each pattern walks the input roughly once per scan
//! instead of once per step.

use std::ops::Range;

use text_size::{TextRange, TextSize};

use super::compile::{CompiledGrammar, CompiledRule, Pattern};
use super::lexer::{Lexeme, Lexemes};
use super::tree::Event;
use crate::config::HighlightOptions;
use crate::errors::{Diagnostic, ErrorCode, HighlightError, Result, Severity};
use crate::grammar::HighlightKind;

/// Raw output of one scan
#[derive(Debug, Default)]
pub(crate) struct ScanOutput {
    pub(crate) events: Vec<Event>,
    pub(crate) diagnostics: Vec<Diagnostic>,
    pub(crate) relevance: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Terminator {
    Child(usize),
    End,
    /// End pattern of the enclosing rule at this stack level
    Ancestor(usize),
    Illegal,
}

/// How scanning a rule's content stopped
#[derive(Debug)]
enum Exit {
    /// The rule's own end matched
    End(Range<usize>),
    /// An enclosing rule's end matched; every rule above `level` closes here
    Unwind { level: usize, at: Range<usize> },
    Abandon(Abandon),
    Eof,
}

#[derive(Debug)]
enum Abandon {
    Illegal(Range<usize>),
    Unterminated,
    TooDeep,
}

#[derive(Debug)]
enum Entered {
    Closed(usize),
    Unwind { level: usize, at: Range<usize> },
    Abandoned(Abandon),
}

/// Restore point taken before entering a rule
struct Mark {
    events: usize,
    tail: Option<Event>,
    diagnostics: usize,
    relevance: u32,
}

/// Last search result per pattern slot
struct MatchCache {
    slots: Vec<Option<CachedMatch>>,
}

#[derive(Clone)]
struct CachedMatch {
    from: usize,
    found: Option<Range<usize>>,
}

impl MatchCache {
    fn new(patterns: usize) -> Self {
        Self {
            slots: vec![None; patterns],
        }
    }

    /// Leftmost match of `pattern` starting at or after `from`.
    fn find(&mut self, text: &str, pattern: &Pattern, from: usize) -> Option<Range<usize>> {
        let slot = &mut self.slots[pattern.slot()];
        if let Some(cached) = slot.as_ref() {
            let still_ahead = cached
                .found
                .as_ref()
                .is_none_or(|found| found.start >= from);
            if cached.from <= from && still_ahead {
                return cached.found.clone();
            }
        }
        let found = pattern.find_at(text, from).map(|m| m.range());
        *slot = Some(CachedMatch {
            from,
            found: found.clone(),
        });
        found
    }
}

pub(crate) struct Scanner<'a> {
    text: &'a str,
    options: &'a HighlightOptions,
    cache: MatchCache,
    out: ScanOutput,
}

impl<'a> Scanner<'a> {
    /// Scan `text` with `grammar`.
    ///
    /// Fails only in strict mode, on a top-level illegal sequence.
    pub(crate) fn scan(
        grammar: &'a CompiledGrammar,
        text: &'a str,
        options: &'a HighlightOptions,
    ) -> Result<ScanOutput> {
        let mut scanner = Scanner {
            text,
            options,
            cache: MatchCache::new(grammar.pattern_count()),
            out: ScanOutput::default(),
        };
        let mut stack = Vec::new();
        match scanner.scan_rule(grammar.root(), &mut stack, 0) {
            Exit::Abandon(Abandon::Illegal(range)) => {
                tracing::debug!(
                    language = grammar.name(),
                    offset = range.start,
                    "illegal sequence in strict mode"
                );
                Err(HighlightError::Illegal {
                    offset: range.start as u32,
                    lexeme: text[range].to_string(),
                })
            }
            // The root has no end and nothing above it, so only EOF remains
            _ => Ok(scanner.out),
        }
    }

    /// Scan the content of `rule` from `start` until it ends.
    fn scan_rule(
        &mut self,
        rule: &'a CompiledRule,
        stack: &mut Vec<&'a CompiledRule>,
        start: usize,
    ) -> Exit {
        let level = stack.len();
        let mut pos = start;
        let mut retry_from = vec![0; rule.children.len()];

        loop {
            let Some((terminator, found)) = self.next_terminator(rule, stack, pos, &retry_from)
            else {
                self.emit_gap(rule, pos..self.text.len());
                return Exit::Eof;
            };

            match terminator {
                Terminator::Child(index) => {
                    if found.is_empty() {
                        retry_from[index] = self.next_char(found.start);
                        continue;
                    }
                    let child = &rule.children[index];
                    let mark = self.mark();
                    self.emit_gap(rule, pos..found.start);

                    stack.push(rule);
                    let entered = self.enter(child, stack, found.clone());
                    stack.pop();

                    match entered {
                        Entered::Closed(resume) => pos = resume,
                        Entered::Unwind { level: target, at } if target == level => {
                            return Exit::End(at);
                        }
                        Entered::Unwind { level: target, at } => {
                            return Exit::Unwind { level: target, at };
                        }
                        Entered::Abandoned(reason) => {
                            self.rewind(mark);
                            self.report_abandoned(child, &found, reason);
                            retry_from[index] = self.next_char(found.start);
                        }
                    }
                }
                Terminator::End => {
                    self.emit_gap(rule, pos..found.start);
                    return Exit::End(found);
                }
                Terminator::Ancestor(target) => {
                    self.emit_gap(rule, pos..found.start);
                    return Exit::Unwind { level: target, at: found };
                }
                Terminator::Illegal => {
                    if level > 0 || self.options.strict {
                        return Exit::Abandon(Abandon::Illegal(found));
                    }
                    if found.start >= self.text.len() {
                        self.emit_gap(rule, pos..self.text.len());
                        return Exit::Eof;
                    }
                    // Top level: reject the lexeme and keep going after it
                    let end = if found.is_empty() {
                        self.next_char(found.start)
                    } else {
                        found.end
                    };
                    self.emit_gap(rule, pos..found.start);
                    self.report_illegal(found.start..end);
                    self.push_token(HighlightKind::TEXT, found.start..end);
                    pos = end;
                }
            }
        }
    }

    /// Enter `child` on its begin match and scan it to completion.
    fn enter(
        &mut self,
        child: &'a CompiledRule,
        stack: &mut Vec<&'a CompiledRule>,
        begin: Range<usize>,
    ) -> Entered {
        if stack.len() > self.options.max_depth {
            return Entered::Abandoned(Abandon::TooDeep);
        }
        if let Some(reason) = self.certain_abandon(child, stack, begin.end) {
            return Entered::Abandoned(reason);
        }

        if let Some(kind) = child.scope {
            self.out.events.push(Event::Start(kind));
        }
        self.emit_gap(child, begin.clone());

        let resume = if child.end.is_none() {
            begin.end
        } else {
            match self.scan_rule(child, stack, begin.end) {
                Exit::End(end) if child.exclude_end => {
                    self.close(child);
                    self.push_token(HighlightKind::TEXT, end.clone());
                    return Entered::Closed(end.end);
                }
                Exit::End(end) => {
                    self.emit_gap(child, end.clone());
                    end.end
                }
                Exit::Unwind { level, at } => {
                    self.close(child);
                    return Entered::Unwind { level, at };
                }
                Exit::Abandon(reason) => return Entered::Abandoned(reason),
                Exit::Eof => return Entered::Abandoned(Abandon::Unterminated),
            }
        };

        self.close(child);
        Entered::Closed(resume)
    }

    fn close(&mut self, rule: &CompiledRule) {
        if rule.scope.is_some() {
            self.out.events.push(Event::Finish);
        }
        self.out.relevance += rule.relevance;
    }

    /// Outcome of scanning `rule` from `from`, when it is known without scanning.
    ///
    /// With no match of its own end or any enclosing end ahead, the rule can
    /// only run out of input or meet its illegal pattern. The first illegal
    /// match is only known up front when no child could cover it.
    fn certain_abandon(
        &mut self,
        rule: &CompiledRule,
        stack: &[&CompiledRule],
        from: usize,
    ) -> Option<Abandon> {
        let text = self.text;
        let end = rule.end.as_ref()?;
        if self.cache.find(text, end, from).is_some() {
            return None;
        }
        for ancestor in stack {
            if let Some(end) = &ancestor.end {
                if self.cache.find(text, end, from).is_some() {
                    return None;
                }
            }
        }
        match &rule.illegal {
            None => Some(Abandon::Unterminated),
            Some(_) if !rule.children.is_empty() => None,
            Some(illegal) => Some(
                self.cache
                    .find(text, illegal, from)
                    .map_or(Abandon::Unterminated, Abandon::Illegal),
            ),
        }
    }

    fn next_terminator(
        &mut self,
        rule: &CompiledRule,
        stack: &[&CompiledRule],
        pos: usize,
        retry_from: &[usize],
    ) -> Option<(Terminator, Range<usize>)> {
        let text = self.text;
        let cache = &mut self.cache;
        let mut best: Option<(Terminator, Range<usize>)> = None;
        let mut consider = |terminator: Terminator, pattern: Option<&Pattern>, from: usize| {
            if from > text.len() {
                return;
            }
            if let Some(found) = pattern.and_then(|pattern| cache.find(text, pattern, from)) {
                if best
                    .as_ref()
                    .is_none_or(|(_, current)| found.start < current.start)
                {
                    best = Some((terminator, found));
                }
            }
        };

        for (index, child) in rule.children.iter().enumerate() {
            consider(
                Terminator::Child(index),
                child.begin.as_ref(),
                pos.max(retry_from[index]),
            );
        }
        consider(Terminator::End, rule.end.as_ref(), pos);
        for (level, ancestor) in stack.iter().enumerate().rev() {
            consider(Terminator::Ancestor(level), ancestor.end.as_ref(), pos);
        }
        consider(Terminator::Illegal, rule.illegal.as_ref(), pos);

        best
    }

    /// Emit unmatched text, classifying words with the rule's keywords.
    fn emit_gap(&mut self, rule: &CompiledRule, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        let Some(keywords) = rule.keywords.as_deref() else {
            self.push_token(HighlightKind::TEXT, range);
            return;
        };
        for (lexeme, word) in Lexemes::new(self.text, range) {
            let category = match lexeme {
                Lexeme::Word => keywords.classify(&self.text[word.clone()]),
                Lexeme::Other => None,
            };
            match category {
                Some(category) => {
                    self.out.relevance += 1;
                    self.push_token(category.into(), word);
                }
                None => self.push_token(HighlightKind::TEXT, word),
            }
        }
    }

    /// Push a token, merging with a directly preceding plain text token.
    fn push_token(&mut self, kind: HighlightKind, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        let range = text_range(range);
        if kind == HighlightKind::TEXT {
            if let Some(Event::Token(HighlightKind::TEXT, previous)) = self.out.events.last_mut() {
                if previous.end() == range.start() {
                    *previous = previous.cover(range);
                    return;
                }
            }
        }
        self.out.events.push(Event::Token(kind, range));
    }

    fn mark(&self) -> Mark {
        Mark {
            events: self.out.events.len(),
            tail: self.out.events.last().copied(),
            diagnostics: self.out.diagnostics.len(),
            relevance: self.out.relevance,
        }
    }

    fn rewind(&mut self, mark: Mark) {
        self.out.events.truncate(mark.events);
        if let (Some(tail), Some(last)) = (mark.tail, self.out.events.last_mut()) {
            *last = tail;
        }
        self.out.diagnostics.truncate(mark.diagnostics);
        self.out.relevance = mark.relevance;
    }

    fn next_char(&self, offset: usize) -> usize {
        self.text[offset.min(self.text.len())..]
            .chars()
            .next()
            .map_or(offset + 1, |ch| offset + ch.len_utf8())
    }

    fn report_illegal(&mut self, range: Range<usize>) {
        let lexeme = &self.text[range.clone()];
        tracing::debug!(offset = range.start, lexeme, "illegal sequence at top level");
        self.out.diagnostics.push(
            Diagnostic::builder(ErrorCode::E0101)
                .message(format!("illegal sequence `{}`", lexeme.escape_debug()))
                .range(text_range(range))
                .hint("text after this point is highlighted from a fresh start")
                .build(),
        );
    }

    fn report_abandoned(&mut self, rule: &CompiledRule, begin: &Range<usize>, reason: Abandon) {
        tracing::trace!(
            rule = %rule.label,
            offset = begin.start,
            ?reason,
            "abandoned rule"
        );
        let diagnostic = match reason {
            Abandon::Illegal(range) => Diagnostic::builder(ErrorCode::E0101)
                .message(format!(
                    "illegal `{}` inside {}",
                    self.text[range.clone()].escape_debug(),
                    rule.label
                ))
                .range(text_range(range)),
            Abandon::Unterminated => Diagnostic::builder(ErrorCode::E0102)
                .message(format!("unterminated {}", rule.label))
                .range(text_range(begin.clone())),
            Abandon::TooDeep => Diagnostic::builder(ErrorCode::E0103)
                .range(text_range(begin.clone()))
                .hint(format!(
                    "raise max_depth above {}",
                    self.options.max_depth
                )),
        };
        self.out.diagnostics.push(
            diagnostic
                .severity(Severity::Warning)
                .scope(rule.label.clone())
                .build(),
        );
    }
}

fn text_range(range: Range<usize>) -> TextRange {
    TextRange::new(TextSize::new(range.start as u32), TextSize::new(range.end as u32))
}
