//! Statement dispatch: classification and execution.
//!
//! A tokenized line is classified by its leading tokens, first match
//! wins: `print`, assignment, `if`, `while`, `func`, `call`, `for`.
//! Branch and loop bodies are themselves statements that re-enter the
//! dispatcher; `while` and `func` additionally pull raw body lines from
//! the active [`LineSource`].

use rill_lexer::Token;
use tracing::debug;

use crate::cond::eval_condition;
use crate::errors::{
    arity_mismatch, invalid_argument, malformed_condition, malformed_for_header,
    malformed_while_header, missing_end, missing_name, missing_print_arg, missing_then,
    undefined_function, unknown_command, EvalError, EvalResult,
};
use crate::expr::{eval_expr, parse_int};
use crate::funcs::FunctionDef;
use crate::interpreter::Interpreter;
use crate::source::{BufferedLines, LineSource};

impl Interpreter {
    /// Classify and execute one tokenized line. Empty lines are no-ops.
    pub(crate) fn dispatch(&mut self, tokens: &[Token], source: &mut dyn LineSource) -> EvalResult {
        let Some(first) = tokens.first() else {
            return Ok(());
        };
        debug!(head = %first.text(), len = tokens.len(), "dispatch");

        if first.is("print") {
            self.exec_print(tokens)
        } else if tokens.len() >= 3 && tokens[1].is("=") {
            self.exec_assign(tokens)
        } else if first.is("if") {
            self.exec_if(tokens, source)
        } else if first.is("while") {
            self.exec_while(tokens, source)
        } else if first.is("func") {
            self.exec_func(tokens, source)
        } else if first.is("call") {
            self.exec_call(tokens)
        } else if first.is("for") {
            self.exec_for(tokens, source)
        } else {
            Err(unknown_command(first.text()))
        }
    }

    /// `print <arg>`: a string literal prints with quotes stripped, a
    /// bound variable prints its value, anything else evaluates the
    /// remaining tokens as an expression.
    fn exec_print(&mut self, tokens: &[Token]) -> EvalResult {
        let Some(arg) = tokens.get(1) else {
            return Err(missing_print_arg());
        };
        if arg.is_str_literal() {
            self.printer.println(arg.string_body());
        } else if let Some(value) = self.env.lookup(arg.text()) {
            self.printer.println(&value.to_string());
        } else {
            let value = eval_expr(&tokens[1..], &self.env)?;
            self.printer.println(&value.to_string());
        }
        Ok(())
    }

    /// `<name> = <expr...>`: evaluate and bind.
    fn exec_assign(&mut self, tokens: &[Token]) -> EvalResult {
        let value = eval_expr(&tokens[2..], &self.env)?;
        self.env.define(tokens[0].text(), value);
        Ok(())
    }

    /// `if <cond> then <stmt> [else <stmt>]`.
    ///
    /// The first `then` and the first `else` after it delimit the
    /// zones; the condition zone must be exactly three tokens. The
    /// taken branch is re-dispatched as a nested statement.
    fn exec_if(&mut self, tokens: &[Token], source: &mut dyn LineSource) -> EvalResult {
        let then_pos = tokens
            .iter()
            .position(|t| t.is("then"))
            .ok_or_else(missing_then)?;
        let cond = &tokens[1..then_pos];
        if cond.len() != 3 {
            return Err(malformed_condition(cond.len()));
        }
        let else_pos = tokens[then_pos + 1..]
            .iter()
            .position(|t| t.is("else"))
            .map(|i| i + then_pos + 1);

        if eval_condition(&cond[0], &cond[1], &cond[2], &self.env)? {
            let end = else_pos.unwrap_or(tokens.len());
            self.dispatch(&tokens[then_pos + 1..end], source)
        } else if let Some(pos) = else_pos {
            self.dispatch(&tokens[pos + 1..], source)
        } else {
            Ok(())
        }
    }

    /// `while <var> <op> <bound> do` followed by body lines up to `end`.
    ///
    /// The body is buffered raw and re-tokenized every iteration; the
    /// condition is re-resolved against the live environment each time
    /// around. A condition that never turns false loops until the host
    /// is interrupted.
    fn exec_while(&mut self, tokens: &[Token], source: &mut dyn LineSource) -> EvalResult {
        if tokens.len() != 5 || !tokens[4].is("do") {
            return Err(malformed_while_header());
        }
        let (var, op, bound) = (&tokens[1], &tokens[2], &tokens[3]);
        let body = collect_block(source, "while")?;
        debug!(var = %var.text(), lines = body.len(), "while body collected");

        while eval_condition(var, op, bound, &self.env)? {
            self.run_body(&body)?;
        }
        Ok(())
    }

    /// `func <name> <params...>` followed by body lines up to `end`.
    ///
    /// The body is stored unparsed; redefinition overwrites.
    fn exec_func(&mut self, tokens: &[Token], source: &mut dyn LineSource) -> EvalResult {
        let Some(name) = tokens.get(1) else {
            return Err(missing_name("func"));
        };
        let params = tokens[2..].iter().map(|t| t.text().to_string()).collect();
        let body = collect_block(source, "func")?;
        debug!(name = %name.text(), lines = body.len(), "function defined");
        self.funcs.define(name.text(), FunctionDef { params, body });
        Ok(())
    }

    /// `call <name> <args...>`.
    ///
    /// Arity is checked before anything executes. The environment is
    /// snapshotted, parameters are bound, the body runs line by line,
    /// and the snapshot is restored unconditionally: success or
    /// failure, the call cannot leak bindings into the caller.
    fn exec_call(&mut self, tokens: &[Token]) -> EvalResult {
        let Some(name) = tokens.get(1) else {
            return Err(missing_name("call"));
        };
        let def = self
            .funcs
            .lookup(name.text())
            .cloned()
            .ok_or_else(|| undefined_function(name.text()))?;
        let args = &tokens[2..];
        if args.len() != def.params.len() {
            return Err(arity_mismatch(name.text(), def.params.len(), args.len()));
        }
        debug!(name = %name.text(), args = args.len(), "call");

        let snapshot = self.env.snapshot();
        let result = self.bind_and_run(&def, args);
        self.env.restore(snapshot);
        result
    }

    /// Bind each argument to its parameter, then run the body.
    ///
    /// Arguments resolve literal-first, then as bound variables, in
    /// order, so an argument may observe parameters bound before it.
    fn bind_and_run(&mut self, def: &FunctionDef, args: &[Token]) -> EvalResult {
        for (param, arg) in def.params.iter().zip(args) {
            let value = if arg.is_digits() {
                parse_int(arg.text())
            } else if let Some(bound) = self.env.lookup(arg.text()) {
                bound
            } else {
                return Err(invalid_argument(arg.text()));
            };
            self.env.define(param.as_str(), value);
        }
        self.run_body(&def.body)
    }

    /// `for <var> = <start> to <end> do <stmt>`: ascending inclusive
    /// iteration over an inline single-statement body. A start greater
    /// than the end performs zero iterations.
    fn exec_for(&mut self, tokens: &[Token], source: &mut dyn LineSource) -> EvalResult {
        let well_formed = tokens.len() >= 8
            && tokens[2].is("=")
            && tokens[4].is("to")
            && tokens[6].is("do")
            && tokens[3].is_digits()
            && tokens[5].is_digits();
        if !well_formed {
            return Err(malformed_for_header());
        }
        let var = tokens[1].text();
        let start = parse_int(tokens[3].text());
        let end = parse_int(tokens[5].text());
        let body = &tokens[7..];

        for i in start..=end {
            self.env.define(var, i);
            self.dispatch(body, source)?;
        }
        Ok(())
    }

    /// Replay stored body lines through the dispatcher.
    fn run_body(&mut self, lines: &[String]) -> EvalResult {
        let mut source = BufferedLines::new(lines.to_vec());
        self.run_lines(&mut source)
    }
}

/// Buffer raw lines from `source` up to the first terminator line.
///
/// Lines are trimmed of trailing whitespace; the terminator `end` is
/// consumed but not stored. An exhausted source is a syntax error, not
/// a hang.
fn collect_block(
    source: &mut dyn LineSource,
    construct: &'static str,
) -> Result<Vec<String>, EvalError> {
    let mut lines = Vec::new();
    while let Some(raw) = source.next_line() {
        let line = raw.trim_end();
        if line == "end" {
            return Ok(lines);
        }
        lines.push(line.to_string());
    }
    Err(missing_end(construct))
}
