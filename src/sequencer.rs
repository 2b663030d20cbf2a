//! Shortest-Path Token Sequencer
//!
//! Turns a byte payload into the minimum-bit-cost sequence of high-level
//! encoding tokens (mode latches, mode shifts, literal codes, two-byte
//! punctuation fragments, and BINARY runs). This is a backward dynamic
//! program over `(position, mode)`: `cost[i][m]` is the minimum number of
//! bits needed to encode `data[i..]` given the encoder is latched into mode
//! `m` at that point. Two kinds of edges feed the recurrence: "actions" that
//! consume one or more bytes (possibly ending in a different mode via a
//! latch), and "epsilon" latches that consume no bytes and exist purely to
//! reposition the latched mode before the next action. Because latch costs
//! are strictly positive the epsilon edges form an acyclic-in-practice
//! relaxation, resolved with a few rounds of Bellman-Ford over the five-node
//! mode graph at each position.

use crate::tables::{self, Mode, ALL_MODES};

const NUM_MODES: usize = 5;
const MAX_BINARY_RUN: usize = 31 + 2047;

/// One step of the high-level encoding token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A literal byte, interpreted in whatever mode is active when it is read.
    Literal(u8),
    /// A two-byte PUNCT fragment (`\r\n`, `. `, `, `, or `: `).
    TwoChar(u8, u8),
    /// Persistently switch to `Mode`.
    Latch(Mode),
    /// Switch to `Mode` for exactly the token that follows, then revert.
    Shift(Mode),
    /// Enter a BINARY run of `len` raw bytes (1..=2078), each carried by a
    /// following [`Token::BinaryByte`].
    Binary(u16),
    /// One raw byte inside a BINARY run.
    BinaryByte(u8),
    /// The FLG(n) function-code escape, reached via `Shift(Mode::Punct)`.
    /// `n == 0` is FNC1; `n` in `1..=6` is followed by `n` [`Token::FlgDigit`]s
    /// giving the decimal digits of an ECI designator.
    Flg(u8),
    /// One decimal digit (0-9) of an FLG(n) ECI value.
    FlgDigit(u8),
}

fn mode_index(m: Mode) -> usize {
    ALL_MODES.iter().position(|x| *x == m).expect("mode in ALL_MODES")
}

fn header_bits(len: usize) -> u32 {
    if len <= 31 {
        5
    } else {
        5 + 11
    }
}

#[derive(Debug, Clone, Copy)]
enum ActionKind {
    DirectChar,
    ShiftChar(Mode),
    TwoCharDirect,
    TwoCharShift(Mode),
    LatchChar(Mode),
    LatchTwoChar(Mode),
    Binary(u16),
}

#[derive(Debug, Clone, Copy)]
enum Choice {
    Action {
        kind: ActionKind,
        next_i: usize,
        next_mode: usize,
    },
    EpsilonLatch {
        target: usize,
    },
}

/// Find the minimum-bit-cost token sequence encoding `data`, assuming the
/// decoder starts in [`Mode::Upper`].
pub fn find_optimal_sequence(data: &[u8]) -> Vec<Token> {
    let n = data.len();
    if n == 0 {
        return Vec::new();
    }

    // dp[i][m] / choices[i][m] computed for i = n down to 0.
    let mut dp: Vec<[u32; NUM_MODES]> = vec![[0; NUM_MODES]; n + 1];
    let mut choices: Vec<[Option<Choice>; NUM_MODES]> = vec![[None; NUM_MODES]; n + 1];

    for i in (0..n).rev() {
        let mut base = [u32::MAX; NUM_MODES];
        let mut base_choice: [Option<Choice>; NUM_MODES] = [None; NUM_MODES];

        for (mi, &m) in ALL_MODES.iter().enumerate() {
            let mut best: Option<(u32, Choice)> = None;
            let mut consider = |cost: u32, choice: Choice| {
                if best.map_or(true, |(c, _)| cost < c) {
                    best = Some((cost, choice));
                }
            };

            // Direct literal in m.
            if tables::find_char(m, data[i]).is_some() {
                let cost = m.code_bits() + dp[i + 1][mi];
                consider(
                    cost,
                    Choice::Action {
                        kind: ActionKind::DirectChar,
                        next_i: i + 1,
                        next_mode: mi,
                    },
                );
            }

            // Two-byte PUNCT fragment, mode already PUNCT.
            if m == Mode::Punct && i + 1 < n {
                if tables::find_two_char(m, data[i], data[i + 1]).is_some() {
                    let cost = m.code_bits() + dp[i + 2][mi];
                    consider(
                        cost,
                        Choice::Action {
                            kind: ActionKind::TwoCharDirect,
                            next_i: i + 2,
                            next_mode: mi,
                        },
                    );
                }
            }

            // Shift to some target mode for one literal or one punct fragment.
            for &target in ALL_MODES.iter() {
                if target == m {
                    continue;
                }
                let Some(_shift_code) = tables::shift_code(m, target) else {
                    continue;
                };
                if tables::find_char(target, data[i]).is_some() {
                    let cost = m.code_bits() + target.code_bits() + dp[i + 1][mi];
                    consider(
                        cost,
                        Choice::Action {
                            kind: ActionKind::ShiftChar(target),
                            next_i: i + 1,
                            next_mode: mi,
                        },
                    );
                }
                if target == Mode::Punct && i + 1 < n {
                    if tables::find_two_char(target, data[i], data[i + 1]).is_some() {
                        let cost = m.code_bits() + target.code_bits() + dp[i + 2][mi];
                        consider(
                            cost,
                            Choice::Action {
                                kind: ActionKind::TwoCharShift(target),
                                next_i: i + 2,
                                next_mode: mi,
                            },
                        );
                    }
                }
            }

            // Latch to some target mode, then one literal or punct fragment there.
            for &target in ALL_MODES.iter() {
                if target == m {
                    continue;
                }
                let Some(_latch_code) = tables::latch_code(m, target) else {
                    continue;
                };
                let ti = mode_index(target);
                if tables::find_char(target, data[i]).is_some() {
                    let cost = m.code_bits() + target.code_bits() + dp[i + 1][ti];
                    consider(
                        cost,
                        Choice::Action {
                            kind: ActionKind::LatchChar(target),
                            next_i: i + 1,
                            next_mode: ti,
                        },
                    );
                }
                if target == Mode::Punct && i + 1 < n {
                    if tables::find_two_char(target, data[i], data[i + 1]).is_some() {
                        let cost = m.code_bits() + target.code_bits() + dp[i + 2][ti];
                        consider(
                            cost,
                            Choice::Action {
                                kind: ActionKind::LatchTwoChar(target),
                                next_i: i + 2,
                                next_mode: ti,
                            },
                        );
                    }
                }
            }

            // BINARY run of length 1..=max, directly from m (UPPER/LOWER/MIXED only).
            if tables::binary_shift_code(m).is_some() {
                let max_len = (n - i).min(MAX_BINARY_RUN);
                for len in 1..=max_len {
                    let cost = m.code_bits() + header_bits(len) + 8 * len as u32 + dp[i + len][mi];
                    consider(
                        cost,
                        Choice::Action {
                            kind: ActionKind::Binary(len as u16),
                            next_i: i + len,
                            next_mode: mi,
                        },
                    );
                }
            }

            if let Some((cost, choice)) = best {
                base[mi] = cost;
                base_choice[mi] = Some(choice);
            }
        }

        // Relax epsilon latch edges to a fixed point (at most NUM_MODES - 1
        // hops can ever help, since latch costs are strictly positive).
        let mut final_cost = base;
        let mut final_choice = base_choice;
        for _ in 0..NUM_MODES {
            let mut improved = false;
            for (mi, &m) in ALL_MODES.iter().enumerate() {
                for (ti, &target) in ALL_MODES.iter().enumerate() {
                    if ti == mi {
                        continue;
                    }
                    let Some(_) = tables::latch_code(m, target) else {
                        continue;
                    };
                    if final_cost[ti] == u32::MAX {
                        continue;
                    }
                    let cost = m.code_bits() + final_cost[ti];
                    if cost < final_cost[mi] {
                        final_cost[mi] = cost;
                        final_choice[mi] = Some(Choice::EpsilonLatch { target: ti });
                        improved = true;
                    }
                }
            }
            if !improved {
                break;
            }
        }

        dp[i] = final_cost;
        choices[i] = final_choice;
    }

    // Forward traceback from (0, Upper).
    let mut tokens = Vec::new();
    let mut i = 0usize;
    let mut mi = mode_index(Mode::Upper);
    while i < n {
        match choices[i][mi].expect("DP must have a reachable choice for every prefix") {
            Choice::EpsilonLatch { target } => {
                tokens.push(Token::Latch(ALL_MODES[target]));
                mi = target;
            }
            Choice::Action {
                kind,
                next_i,
                next_mode,
            } => {
                emit_action(&mut tokens, kind, data, i);
                i = next_i;
                mi = next_mode;
            }
        }
    }
    tokens
}

fn emit_action(tokens: &mut Vec<Token>, kind: ActionKind, data: &[u8], i: usize) {
    match kind {
        ActionKind::DirectChar => tokens.push(Token::Literal(data[i])),
        ActionKind::ShiftChar(target) => {
            tokens.push(Token::Shift(target));
            tokens.push(Token::Literal(data[i]));
        }
        ActionKind::TwoCharDirect => tokens.push(Token::TwoChar(data[i], data[i + 1])),
        ActionKind::TwoCharShift(target) => {
            tokens.push(Token::Shift(target));
            tokens.push(Token::TwoChar(data[i], data[i + 1]));
        }
        ActionKind::LatchChar(target) => {
            tokens.push(Token::Latch(target));
            tokens.push(Token::Literal(data[i]));
        }
        ActionKind::LatchTwoChar(target) => {
            tokens.push(Token::Latch(target));
            tokens.push(Token::TwoChar(data[i], data[i + 1]));
        }
        ActionKind::Binary(len) => {
            tokens.push(Token::Binary(len));
            for &b in &data[i..i + len as usize] {
                tokens.push(Token::BinaryByte(b));
            }
        }
    }
}

/// Build the token prefix for an FLG(n) ECI designator escape: a shift to
/// PUNCT, the FLG(n) escape itself, and `n` decimal-digit tokens for `eci`.
/// `n` is the natural decimal digit count of `eci` (no artificial padding).
pub fn eci_escape_tokens(eci: u32) -> Vec<Token> {
    let digits: Vec<u8> = eci
        .to_string()
        .bytes()
        .map(|b| b - b'0')
        .collect();
    assert!(
        (1..=6).contains(&digits.len()),
        "ECI designator must be 1-6 decimal digits"
    );
    let mut tokens = vec![Token::Shift(Mode::Punct), Token::Flg(digits.len() as u8)];
    tokens.extend(digits.into_iter().map(Token::FlgDigit));
    tokens
}
