//! End-to-end bytecode checks over the public API: whole programs in,
//! exact instruction streams and structural invariants out.

use larkc_compile::compile;
use larkc_vm::{dump::dump, Obj, ObjFn, Op, Value, Vm};

fn compile_ok(source: &str) -> (ObjFn, Vm) {
    let mut vm = Vm::new();
    let func = compile(&mut vm, source).expect("expected source to compile");
    (func, vm)
}

fn op(o: Op) -> u8 {
    o.into()
}

/// Decodes `code` into (offset, op) pairs, respecting operand widths.
fn instructions(func: &ObjFn) -> Vec<(usize, Op)> {
    let mut out = Vec::new();
    let mut offset = 0;
    while offset < func.code.len() {
        let op = Op::try_from(func.code[offset]).expect("only valid opcodes are emitted");
        out.push((offset, op));
        offset += 1 + op.num_operands();
    }
    out
}

/// Every function object in the compile result, the top level included.
fn all_functions(top: &ObjFn) -> Vec<ObjFn> {
    let mut out = vec![top.clone()];
    let mut cursor = 0;
    while cursor < out.len() {
        let nested: Vec<ObjFn> = out[cursor]
            .constants
            .iter()
            .filter_map(|c| match c {
                Value::Obj(Obj::Fn(f)) => Some((**f).clone()),
                _ => None,
            })
            .collect();
        out.extend(nested);
        cursor += 1;
    }
    out
}

#[test]
fn every_function_ends_with_end() {
    let source = "class Pair {\n  first { this }\n  swap(a, b) { if (true) a else b }\n}\nvar p = Pair\nfn(x) x.swap(1, 2)";
    let (func, _) = compile_ok(source);

    for f in all_functions(&func) {
        assert_eq!(f.code.last(), Some(&op(Op::End)));
        // Decoding must land exactly on the buffer end.
        let decoded = instructions(&f);
        assert_eq!(decoded.last().map(|&(_, o)| o), Some(Op::End));
    }
}

#[test]
fn jump_operands_stay_in_bounds_and_hit_targets() {
    let source = "if (1 < 2) { 1\n2\n3 } else { 4 }\nif (true) 5";
    let (func, _) = compile_ok(source);

    for (offset, o) in instructions(&func) {
        if o == Op::Jump || o == Op::JumpIf {
            let operand_at = offset + 1;
            let displacement = func.code[operand_at] as usize;
            let target = operand_at + 1 + displacement;
            assert!(target <= func.code.len());
            // A patched jump lands on an instruction boundary.
            assert!(
                instructions(&func).iter().any(|&(at, _)| at == target),
                "jump at {} lands inside an instruction",
                offset
            );
        }
    }
}

#[test]
fn global_declaration_order_is_symbol_order() {
    let (_, vm) = compile_ok("var a = 1\nvar b = 2\nclass C {}\nvar d = 3");
    assert_eq!(vm.globals.find("a"), Some(0));
    assert_eq!(vm.globals.find("b"), Some(1));
    assert_eq!(vm.globals.find("C"), Some(2));
    assert_eq!(vm.globals.find("d"), Some(3));
}

#[test]
fn class_with_k_methods_emits_k_method_instructions() {
    let source = "class Shape {\n  area { 0 }\n  name { \"shape\" }\n  scaled(f) { f }\n}";
    let (func, vm) = compile_ok(source);

    let methods: Vec<usize> = instructions(&func)
        .iter()
        .filter(|&&(_, o)| o == Op::Method)
        .map(|&(at, _)| at)
        .collect();
    assert_eq!(methods.len(), 3);

    // Distinct names get distinct symbols.
    let symbols: Vec<u8> = methods.iter().map(|&at| func.code[at + 1]).collect();
    assert_eq!(symbols[0], vm.methods.find("area").unwrap() as u8);
    assert_eq!(symbols[1], vm.methods.find("name").unwrap() as u8);
    assert_eq!(symbols[2], vm.methods.find("scaled ").unwrap() as u8);
    assert!(symbols[0] != symbols[1] && symbols[1] != symbols[2]);
}

#[test]
fn call_sites_resolve_to_definition_symbols() {
    let source = "class Greeter {\n  greet(name) { name }\n}\nGreeter.greet(\"you\")\nGreeter.greet(\"me\")";
    let (func, vm) = compile_ok(source);
    let greet = vm.methods.find("greet ").unwrap() as u8;

    let call_symbols: Vec<u8> = instructions(&func)
        .iter()
        .filter(|&&(_, o)| o == Op::Call1)
        .map(|&(at, _)| func.code[at + 1])
        .collect();
    assert_eq!(call_symbols, vec![greet, greet]);
}

#[test]
fn same_source_compiles_to_identical_bytecode() {
    let source = "class Counter {\n  bump { this.set(1) }\n}\nvar c = Counter\nif (true) c else null";
    let (first, _) = compile_ok(source);
    let (second, _) = compile_ok(source);
    assert_eq!(first, second);
}

#[test]
fn full_program_instruction_stream() {
    // The whole §-pipeline in one program: definitions, operators,
    // dispatch, and control flow.
    let source = "var total = 0\ntotal = total + 1\nif (total > 0) total.print()";
    let (func, vm) = compile_ok(source);

    let plus = vm.methods.find("+ ").unwrap() as u8;
    let gt = vm.methods.find("> ").unwrap() as u8;
    let print = vm.methods.find("print").unwrap() as u8;

    assert_eq!(
        func.code,
        vec![
            // var total = 0
            op(Op::Constant),
            0,
            op(Op::StoreGlobal),
            0,
            op(Op::Pop),
            // total = total + 1
            op(Op::LoadGlobal),
            0,
            op(Op::Constant),
            1,
            op(Op::Call1),
            plus,
            op(Op::StoreGlobal),
            0,
            op(Op::Pop),
            // if (total > 0) total.print()
            op(Op::LoadGlobal),
            0,
            op(Op::Constant),
            2,
            op(Op::Call1),
            gt,
            op(Op::JumpIf),
            6,
            op(Op::LoadGlobal),
            0,
            op(Op::Call0),
            print,
            op(Op::Jump),
            1,
            op(Op::Null),
            op(Op::End)
        ]
    );
}

#[test]
fn dump_lists_every_compiled_instruction() {
    let (func, _) = compile_ok("var x = 1\nif (true) x");
    let listing = dump(&func);

    assert!(listing.contains("CONSTANT 0"));
    assert!(listing.contains("STORE_GLOBAL 0"));
    assert!(listing.contains("JUMP_IF"));
    assert!(listing.contains("END"));
    assert!(!listing.contains("??"));
    assert_eq!(listing.lines().count(), instructions(&func).len());
}

#[test]
fn failed_compile_returns_all_diagnostics_in_order() {
    let mut vm = Vm::new();
    let err = compile(&mut vm, "one\ntwo\nthree").unwrap_err();
    let lines: Vec<u32> = err.diagnostics.iter().map(|d| d.line).collect();
    assert_eq!(lines, vec![1, 2, 3]);
    for diag in &err.diagnostics {
        assert_eq!(diag.message, "Undefined variable.");
    }
}
