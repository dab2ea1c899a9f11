//! End-to-end tests of the single-step execution engine (component C)
//! against the architectural state in component B, driven entirely through
//! `dcrypto_sim::prelude`'s public surface (no crate-internal access).

use dcrypto_sim::prelude::*;
use std::rc::Rc;

fn program(instrs: Vec<TaggedInstruction>) -> Machine {
    let _ = tracing_subscriber::fmt::try_init();
    let imem: Vec<Rc<dyn DecodedInstruction>> =
        instrs.into_iter().map(|i| Rc::new(i) as Rc<dyn DecodedInstruction>).collect();
    Machine::with_default_dmem(imem)
}

#[test]
fn nested_loops_multiply_iteration_counts() {
    // x1 = 3 (outer), x2 = 2 (inner), x3 = counter
    // loop x1, 3:
    //   addi x4, x0, 0       ; no-op filler so the inner loop's body_size is right
    //   loop x2, 1:
    //     addi x3, x3, 1
    let m = program(vec![
        TaggedInstruction::Addi { grd: 1, grs: 0, imm: 3 },
        TaggedInstruction::Addi { grd: 2, grs: 0, imm: 2 },
        TaggedInstruction::Loop { grs: 1, body_size: 2 },
        TaggedInstruction::Loop { grs: 2, body_size: 1 },
        TaggedInstruction::Addi { grd: 3, grs: 3, imm: 1 },
    ]);
    let mut m = m;
    m.run_to_completion().unwrap();
    assert_eq!(m.get_gpr(3).unwrap(), 6);
}

#[test]
fn bn_addm_reduces_modulo_mod_register() {
    let mut m = program(vec![
        TaggedInstruction::LoadImmediate { wd: 1, value: U256::from(10u32) },
        TaggedInstruction::LoadImmediate { wd: 2, value: U256::from(8u32) },
        TaggedInstruction::BnAddm { wd: 0, wa: 1, wb: 2 },
    ]);
    m.set_mod(U256::from(12u32));
    m.run_to_completion().unwrap();
    assert_eq!(m.get_wide(0).unwrap(), U256::from(6u32));
}

#[test]
fn bn_subm_wraps_below_zero() {
    let mut m = program(vec![
        TaggedInstruction::LoadImmediate { wd: 1, value: U256::from(2u32) },
        TaggedInstruction::LoadImmediate { wd: 2, value: U256::from(5u32) },
        TaggedInstruction::BnSubm { wd: 0, wa: 1, wb: 2 },
    ]);
    m.set_mod(U256::from(12u32));
    m.run_to_completion().unwrap();
    assert_eq!(m.get_wide(0).unwrap(), U256::from(9u32));
}

#[test]
fn indirect_dmem_load_store_round_trips_with_post_increment() {
    let mut m = program(vec![
        TaggedInstruction::LoadImmediate { wd: 5, value: U256::from(0x1234u32) },
        TaggedInstruction::BnSid { grs2: 5, offset: 0, grs1: 10, post_increment: true },
        TaggedInstruction::BnLid { grd: 6, offset: -1, grs: 10, post_increment: false },
    ]);
    m.run_to_completion().unwrap();
    assert_eq!(m.get_gpr(10).unwrap(), 1);
    assert_eq!(m.get_wide(6).unwrap(), U256::from(0x1234u32));
}

#[test]
fn wsr_index_zero_aliases_mod_register() {
    let mut m = program(vec![
        TaggedInstruction::LoadImmediate { wd: 1, value: U256::from(99u32) },
        TaggedInstruction::BnWsrw { wsr: 0, wa: 1 },
    ]);
    m.run_to_completion().unwrap();
    assert_eq!(m.get_mod(), U256::from(99u32));
    assert_eq!(m.get_wsr(0).unwrap(), U256::from(99u32));
}

#[test]
fn mulqacc_wo_writes_full_product_and_clears_accumulator() {
    // w1 quarter 0 = 3, w2 quarter 0 = 4 -> acc = 12, written to w0, acc cleared.
    let mut m = program(vec![
        TaggedInstruction::LoadImmediate { wd: 1, value: U256::from(3u32) },
        TaggedInstruction::LoadImmediate { wd: 2, value: U256::from(4u32) },
        TaggedInstruction::BnMulqaccWo { wd: 0, wa: 1, qa: 0, wb: 2, qb: 0, shift: 0, zero_acc: true },
    ]);
    m.run_to_completion().unwrap();
    assert_eq!(m.get_wide(0).unwrap(), U256::from(12u32));
    assert_eq!(m.get_acc(), U256::ZERO);
}

#[test]
fn gpr_x0_is_hardwired_to_zero() {
    let mut m = program(vec![TaggedInstruction::Addi { grd: 0, grs: 0, imm: 42 }]);
    m.run_to_completion().unwrap();
    assert_eq!(m.get_gpr(0).unwrap(), 0);
}

#[test]
fn jal_links_return_address_and_jumps() {
    let mut m = program(vec![
        TaggedInstruction::Jal { grd: 5, offset: 2 },
        TaggedInstruction::Nop,
        TaggedInstruction::Addi { grd: 6, grs: 0, imm: 1 },
    ]);
    m.run_to_completion().unwrap();
    assert_eq!(m.get_gpr(5).unwrap(), 1);
    assert_eq!(m.get_gpr(6).unwrap(), 1);
}

#[test]
fn bm_branches_on_mul_flag_m() {
    // a negative-looking value (top bit set) sets the M flag.
    let mut m = program(vec![
        TaggedInstruction::LoadImmediate { wd: 1, value: U256::MAX },
        TaggedInstruction::LoadImmediate { wd: 2, value: U256::ZERO },
        TaggedInstruction::BnAdd { wd: 0, wa: 1, wb: 2, fg: FlagGroupId::Mul, shift: WideShift::None },
        TaggedInstruction::Bm { offset: 2, fg: FlagGroupId::Mul },
        TaggedInstruction::Addi { grd: 7, grs: 0, imm: 1 },
        TaggedInstruction::Addi { grd: 8, grs: 0, imm: 1 },
    ]);
    m.run_to_completion().unwrap();
    assert_eq!(m.get_gpr(7).unwrap(), 0, "branch should have skipped this instruction");
    assert_eq!(m.get_gpr(8).unwrap(), 1);
}

#[test]
fn out_of_range_wide_register_index_is_rejected() {
    let m = program(vec![]);
    assert!(matches!(m.get_wide(32), Err(EngineError::IndexRange { what: "wide register", .. })));
}

#[test]
fn call_stack_overflow_is_bounded() {
    // call itself repeatedly without ever returning, past the hardware depth limit.
    let mut instrs = Vec::new();
    for _ in 0..16 {
        instrs.push(TaggedInstruction::Call { target: 0 });
    }
    let mut m = program(instrs);
    let mut last_err = None;
    for _ in 0..16 {
        if let Err(e) = m.step() {
            last_err = Some(e);
            break;
        }
    }
    assert!(matches!(last_err, Some(EngineError::CallStackOverflow { .. })));
}

#[test]
fn breakpoints_halt_before_executing_and_can_be_cleared() {
    let mut m = program(vec![
        TaggedInstruction::Addi { grd: 1, grs: 0, imm: 1 },
        TaggedInstruction::Addi { grd: 1, grs: 1, imm: 1 },
    ]);
    m.set_breakpoint(1);
    m.step().unwrap();
    assert_eq!(m.get_gpr(1).unwrap(), 1);
    let err = m.step().unwrap_err();
    assert!(err.is_recoverable());
    m.clear_breakpoint(1);
    m.step().unwrap();
    assert_eq!(m.get_gpr(1).unwrap(), 2);
}
