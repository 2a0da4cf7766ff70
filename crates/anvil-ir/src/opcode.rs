//! Opcode set and static metadata
//!
//! One macro invocation defines the `Opcode` enum and its flat metadata
//! table, so the two can never drift apart. Each entry records the operand
//! kinds, an optional semantic operator (which drives constant folding and
//! compare/branch fusion), and control-flow flags consumed by the compile
//! loop and the back ends.

/// Operand kind permitted in an instruction slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandKind {
    Empty,
    Int,
    Long,
    Float32,
    Float64,
    NFloat,
    Ptr,
    Any,
}

/// Semantic operator of an opcode, where one exists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Neg,
    And,
    Or,
    Xor,
    Not,
    Shl,
    Shr,
    ShrUn,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    Copy,
    AddressOf,
}

/// Control-flow and operand-shape flags
pub mod opflags {
    /// Takes a label and may transfer control
    pub const IS_BRANCH: u16 = 0x0001;
    /// Direct call to another function in the context
    pub const IS_CALL: u16 = 0x0002;
    /// Call to a native C function
    pub const IS_CALL_EXTERNAL: u16 = 0x0004;
    /// Multi-way branch through a label table
    pub const IS_JUMP_TABLE: u16 = 0x0008;
    /// Produces the address of a label
    pub const IS_ADDROF_LABEL: u16 = 0x0010;
    /// Moves a value into or out of a specific machine register
    pub const IS_REG: u16 = 0x0020;
    /// Carries one inline native-int argument
    pub const NINT_ARG: u16 = 0x0040;
    /// Carries two inline native-int arguments
    pub const NINT_ARG_TWO: u16 = 0x0080;
}

/// Static description of one opcode
#[derive(Debug, Clone, Copy)]
pub struct OpcodeInfo {
    pub name: &'static str,
    pub dest: OperandKind,
    pub src1: OperandKind,
    pub src2: OperandKind,
    pub oper: Option<Operator>,
    pub flags: u16,
}

macro_rules! oper_opt {
    (__) => {
        None
    };
    ($oper:ident) => {
        Some(Operator::$oper)
    };
}

macro_rules! define_opcodes {
    ($($variant:ident, $name:literal, $dest:ident, $src1:ident, $src2:ident, $oper:tt, $flags:expr;)*) => {
        /// Every opcode the instruction stream can carry
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u16)]
        pub enum Opcode {
            $($variant,)*
        }

        /// Number of opcodes in the table
        pub const NUM_OPCODES: usize = 0 $(+ { let _ = $name; 1 })*;

        static OPCODE_INFO: [OpcodeInfo; NUM_OPCODES] = [
            $(OpcodeInfo {
                name: $name,
                dest: OperandKind::$dest,
                src1: OperandKind::$src1,
                src2: OperandKind::$src2,
                oper: oper_opt!($oper),
                flags: $flags,
            },)*
        ];
    };
}

use opflags::*;

define_opcodes! {
    // Simple
    Nop, "nop", Empty, Empty, Empty, __, 0;

    // Conversions
    TruncSByte, "trunc_sbyte", Int, Int, Empty, __, 0;
    TruncUByte, "trunc_ubyte", Int, Int, Empty, __, 0;
    TruncShort, "trunc_short", Int, Int, Empty, __, 0;
    TruncUShort, "trunc_ushort", Int, Int, Empty, __, 0;
    TruncInt, "trunc_int", Int, Int, Empty, __, 0;
    TruncUInt, "trunc_uint", Int, Int, Empty, __, 0;
    CheckSByte, "check_sbyte", Int, Int, Empty, __, 0;
    CheckUByte, "check_ubyte", Int, Int, Empty, __, 0;
    CheckShort, "check_short", Int, Int, Empty, __, 0;
    CheckUShort, "check_ushort", Int, Int, Empty, __, 0;
    CheckInt, "check_int", Int, Int, Empty, __, 0;
    CheckUInt, "check_uint", Int, Int, Empty, __, 0;
    LowWord, "low_word", Int, Long, Empty, __, 0;
    ExpandInt, "expand_int", Long, Int, Empty, __, 0;
    ExpandUInt, "expand_uint", Long, Int, Empty, __, 0;
    CheckLowWord, "check_low_word", Int, Long, Empty, __, 0;
    CheckSignedLowWord, "check_signed_low_word", Int, Long, Empty, __, 0;
    CheckLong, "check_long", Long, Long, Empty, __, 0;
    CheckULong, "check_ulong", Long, Long, Empty, __, 0;
    NFloatToInt, "nfloat_to_int", Int, NFloat, Empty, __, 0;
    NFloatToUInt, "nfloat_to_uint", Int, NFloat, Empty, __, 0;
    NFloatToLong, "nfloat_to_long", Long, NFloat, Empty, __, 0;
    NFloatToULong, "nfloat_to_ulong", Long, NFloat, Empty, __, 0;
    CheckNFloatToInt, "check_nfloat_to_int", Int, NFloat, Empty, __, 0;
    CheckNFloatToUInt, "check_nfloat_to_uint", Int, NFloat, Empty, __, 0;
    CheckNFloatToLong, "check_nfloat_to_long", Long, NFloat, Empty, __, 0;
    CheckNFloatToULong, "check_nfloat_to_ulong", Long, NFloat, Empty, __, 0;
    IntToNFloat, "int_to_nfloat", NFloat, Int, Empty, __, 0;
    UIntToNFloat, "uint_to_nfloat", NFloat, Int, Empty, __, 0;
    LongToNFloat, "long_to_nfloat", NFloat, Long, Empty, __, 0;
    ULongToNFloat, "ulong_to_nfloat", NFloat, Long, Empty, __, 0;
    NFloatToFloat32, "nfloat_to_float32", Float32, NFloat, Empty, __, 0;
    NFloatToFloat64, "nfloat_to_float64", Float64, NFloat, Empty, __, 0;
    Float32ToNFloat, "float32_to_nfloat", NFloat, Float32, Empty, __, 0;
    Float64ToNFloat, "float64_to_nfloat", NFloat, Float64, Empty, __, 0;

    // Integer arithmetic
    IAdd, "iadd", Int, Int, Int, Add, 0;
    IAddOvf, "iadd_ovf", Int, Int, Int, __, 0;
    IAddOvfUn, "iadd_ovf_un", Int, Int, Int, __, 0;
    ISub, "isub", Int, Int, Int, Sub, 0;
    ISubOvf, "isub_ovf", Int, Int, Int, __, 0;
    ISubOvfUn, "isub_ovf_un", Int, Int, Int, __, 0;
    IMul, "imul", Int, Int, Int, Mul, 0;
    IMulOvf, "imul_ovf", Int, Int, Int, __, 0;
    IMulOvfUn, "imul_ovf_un", Int, Int, Int, __, 0;
    IDiv, "idiv", Int, Int, Int, Div, 0;
    IDivUn, "idiv_un", Int, Int, Int, __, 0;
    IRem, "irem", Int, Int, Int, Rem, 0;
    IRemUn, "irem_un", Int, Int, Int, __, 0;
    INeg, "ineg", Int, Int, Empty, Neg, 0;
    LAdd, "ladd", Long, Long, Long, Add, 0;
    LAddOvf, "ladd_ovf", Long, Long, Long, __, 0;
    LAddOvfUn, "ladd_ovf_un", Long, Long, Long, __, 0;
    LSub, "lsub", Long, Long, Long, Sub, 0;
    LSubOvf, "lsub_ovf", Long, Long, Long, __, 0;
    LSubOvfUn, "lsub_ovf_un", Long, Long, Long, __, 0;
    LMul, "lmul", Long, Long, Long, Mul, 0;
    LMulOvf, "lmul_ovf", Long, Long, Long, __, 0;
    LMulOvfUn, "lmul_ovf_un", Long, Long, Long, __, 0;
    LDiv, "ldiv", Long, Long, Long, Div, 0;
    LDivUn, "ldiv_un", Long, Long, Long, __, 0;
    LRem, "lrem", Long, Long, Long, Rem, 0;
    LRemUn, "lrem_un", Long, Long, Long, __, 0;
    LNeg, "lneg", Long, Long, Empty, Neg, 0;
    FAdd, "fadd", Float32, Float32, Float32, Add, 0;
    FSub, "fsub", Float32, Float32, Float32, Sub, 0;
    FMul, "fmul", Float32, Float32, Float32, Mul, 0;
    FDiv, "fdiv", Float32, Float32, Float32, Div, 0;
    FRem, "frem", Float32, Float32, Float32, Rem, 0;
    FRemIeee, "frem_ieee", Float32, Float32, Float32, __, 0;
    FNeg, "fneg", Float32, Float32, Empty, Neg, 0;
    DAdd, "dadd", Float64, Float64, Float64, Add, 0;
    DSub, "dsub", Float64, Float64, Float64, Sub, 0;
    DMul, "dmul", Float64, Float64, Float64, Mul, 0;
    DDiv, "ddiv", Float64, Float64, Float64, Div, 0;
    DRem, "drem", Float64, Float64, Float64, Rem, 0;
    DRemIeee, "drem_ieee", Float64, Float64, Float64, __, 0;
    DNeg, "dneg", Float64, Float64, Empty, Neg, 0;
    NFAdd, "nfadd", NFloat, NFloat, NFloat, Add, 0;
    NFSub, "nfsub", NFloat, NFloat, NFloat, Sub, 0;
    NFMul, "nfmul", NFloat, NFloat, NFloat, Mul, 0;
    NFDiv, "nfdiv", NFloat, NFloat, NFloat, Div, 0;
    NFRem, "nfrem", NFloat, NFloat, NFloat, Rem, 0;
    NFRemIeee, "nfrem_ieee", NFloat, NFloat, NFloat, __, 0;
    NFNeg, "nfneg", NFloat, NFloat, Empty, Neg, 0;

    // Bitwise
    IAnd, "iand", Int, Int, Int, And, 0;
    IOr, "ior", Int, Int, Int, Or, 0;
    IXor, "ixor", Int, Int, Int, Xor, 0;
    INot, "inot", Int, Int, Empty, Not, 0;
    IShl, "ishl", Int, Int, Int, Shl, 0;
    IShr, "ishr", Int, Int, Int, Shr, 0;
    IShrUn, "ishr_un", Int, Int, Int, ShrUn, 0;
    LAnd, "land", Long, Long, Long, And, 0;
    LOr, "lor", Long, Long, Long, Or, 0;
    LXor, "lxor", Long, Long, Long, Xor, 0;
    LNot, "lnot", Long, Long, Empty, Not, 0;
    LShl, "lshl", Long, Long, Int, Shl, 0;
    LShr, "lshr", Long, Long, Int, Shr, 0;
    LShrUn, "lshr_un", Long, Long, Int, ShrUn, 0;

    // Branches
    Br, "br", Empty, Empty, Empty, __, IS_BRANCH;
    BrIFalse, "br_ifalse", Empty, Int, Empty, __, IS_BRANCH;
    BrITrue, "br_itrue", Empty, Int, Empty, __, IS_BRANCH;
    BrIEq, "br_ieq", Empty, Int, Int, Eq, IS_BRANCH;
    BrINe, "br_ine", Empty, Int, Int, Ne, IS_BRANCH;
    BrILt, "br_ilt", Empty, Int, Int, Lt, IS_BRANCH;
    BrILtUn, "br_ilt_un", Empty, Int, Int, __, IS_BRANCH;
    BrILe, "br_ile", Empty, Int, Int, Le, IS_BRANCH;
    BrILeUn, "br_ile_un", Empty, Int, Int, __, IS_BRANCH;
    BrIGt, "br_igt", Empty, Int, Int, Gt, IS_BRANCH;
    BrIGtUn, "br_igt_un", Empty, Int, Int, __, IS_BRANCH;
    BrIGe, "br_ige", Empty, Int, Int, Ge, IS_BRANCH;
    BrIGeUn, "br_ige_un", Empty, Int, Int, __, IS_BRANCH;
    BrLFalse, "br_lfalse", Empty, Long, Empty, __, IS_BRANCH;
    BrLTrue, "br_ltrue", Empty, Long, Empty, __, IS_BRANCH;
    BrLEq, "br_leq", Empty, Long, Long, Eq, IS_BRANCH;
    BrLNe, "br_lne", Empty, Long, Long, Ne, IS_BRANCH;
    BrLLt, "br_llt", Empty, Long, Long, Lt, IS_BRANCH;
    BrLLtUn, "br_llt_un", Empty, Long, Long, __, IS_BRANCH;
    BrLLe, "br_lle", Empty, Long, Long, Le, IS_BRANCH;
    BrLLeUn, "br_lle_un", Empty, Long, Long, __, IS_BRANCH;
    BrLGt, "br_lgt", Empty, Long, Long, Gt, IS_BRANCH;
    BrLGtUn, "br_lgt_un", Empty, Long, Long, __, IS_BRANCH;
    BrLGe, "br_lge", Empty, Long, Long, Ge, IS_BRANCH;
    BrLGeUn, "br_lge_un", Empty, Long, Long, __, IS_BRANCH;
    BrFEq, "br_feq", Empty, Float32, Float32, Eq, IS_BRANCH;
    BrFNe, "br_fne", Empty, Float32, Float32, Ne, IS_BRANCH;
    BrFLt, "br_flt", Empty, Float32, Float32, Lt, IS_BRANCH;
    BrFLe, "br_fle", Empty, Float32, Float32, Le, IS_BRANCH;
    BrFGt, "br_fgt", Empty, Float32, Float32, Gt, IS_BRANCH;
    BrFGe, "br_fge", Empty, Float32, Float32, Ge, IS_BRANCH;
    BrFEqInv, "br_feq_inv", Empty, Float32, Float32, __, IS_BRANCH;
    BrFNeInv, "br_fne_inv", Empty, Float32, Float32, __, IS_BRANCH;
    BrFLtInv, "br_flt_inv", Empty, Float32, Float32, __, IS_BRANCH;
    BrFLeInv, "br_fle_inv", Empty, Float32, Float32, __, IS_BRANCH;
    BrFGtInv, "br_fgt_inv", Empty, Float32, Float32, __, IS_BRANCH;
    BrFGeInv, "br_fge_inv", Empty, Float32, Float32, __, IS_BRANCH;
    BrDEq, "br_deq", Empty, Float64, Float64, Eq, IS_BRANCH;
    BrDNe, "br_dne", Empty, Float64, Float64, Ne, IS_BRANCH;
    BrDLt, "br_dlt", Empty, Float64, Float64, Lt, IS_BRANCH;
    BrDLe, "br_dle", Empty, Float64, Float64, Le, IS_BRANCH;
    BrDGt, "br_dgt", Empty, Float64, Float64, Gt, IS_BRANCH;
    BrDGe, "br_dge", Empty, Float64, Float64, Ge, IS_BRANCH;
    BrDEqInv, "br_deq_inv", Empty, Float64, Float64, __, IS_BRANCH;
    BrDNeInv, "br_dne_inv", Empty, Float64, Float64, __, IS_BRANCH;
    BrDLtInv, "br_dlt_inv", Empty, Float64, Float64, __, IS_BRANCH;
    BrDLeInv, "br_dle_inv", Empty, Float64, Float64, __, IS_BRANCH;
    BrDGtInv, "br_dgt_inv", Empty, Float64, Float64, __, IS_BRANCH;
    BrDGeInv, "br_dge_inv", Empty, Float64, Float64, __, IS_BRANCH;
    BrNFEq, "br_nfeq", Empty, NFloat, NFloat, Eq, IS_BRANCH;
    BrNFNe, "br_nfne", Empty, NFloat, NFloat, Ne, IS_BRANCH;
    BrNFLt, "br_nflt", Empty, NFloat, NFloat, Lt, IS_BRANCH;
    BrNFLe, "br_nfle", Empty, NFloat, NFloat, Le, IS_BRANCH;
    BrNFGt, "br_nfgt", Empty, NFloat, NFloat, Gt, IS_BRANCH;
    BrNFGe, "br_nfge", Empty, NFloat, NFloat, Ge, IS_BRANCH;
    BrNFEqInv, "br_nfeq_inv", Empty, NFloat, NFloat, __, IS_BRANCH;
    BrNFNeInv, "br_nfne_inv", Empty, NFloat, NFloat, __, IS_BRANCH;
    BrNFLtInv, "br_nflt_inv", Empty, NFloat, NFloat, __, IS_BRANCH;
    BrNFLeInv, "br_nfle_inv", Empty, NFloat, NFloat, __, IS_BRANCH;
    BrNFGtInv, "br_nfgt_inv", Empty, NFloat, NFloat, __, IS_BRANCH;
    BrNFGeInv, "br_nfge_inv", Empty, NFloat, NFloat, __, IS_BRANCH;

    // Comparisons
    ICmp, "icmp", Int, Int, Int, __, 0;
    ICmpUn, "icmp_un", Int, Int, Int, __, 0;
    LCmp, "lcmp", Int, Long, Long, __, 0;
    LCmpUn, "lcmp_un", Int, Long, Long, __, 0;
    FCmpL, "fcmpl", Int, Float32, Float32, __, 0;
    FCmpG, "fcmpg", Int, Float32, Float32, __, 0;
    DCmpL, "dcmpl", Int, Float64, Float64, __, 0;
    DCmpG, "dcmpg", Int, Float64, Float64, __, 0;
    NFCmpL, "nfcmpl", Int, NFloat, NFloat, __, 0;
    NFCmpG, "nfcmpg", Int, NFloat, NFloat, __, 0;
    IEq, "ieq", Int, Int, Int, Eq, 0;
    INe, "ine", Int, Int, Int, Ne, 0;
    ILt, "ilt", Int, Int, Int, Lt, 0;
    ILtUn, "ilt_un", Int, Int, Int, __, 0;
    ILe, "ile", Int, Int, Int, Le, 0;
    ILeUn, "ile_un", Int, Int, Int, __, 0;
    IGt, "igt", Int, Int, Int, Gt, 0;
    IGtUn, "igt_un", Int, Int, Int, __, 0;
    IGe, "ige", Int, Int, Int, Ge, 0;
    IGeUn, "ige_un", Int, Int, Int, __, 0;
    LEq, "leq", Int, Long, Long, Eq, 0;
    LNe, "lne", Int, Long, Long, Ne, 0;
    LLt, "llt", Int, Long, Long, Lt, 0;
    LLtUn, "llt_un", Int, Long, Long, __, 0;
    LLe, "lle", Int, Long, Long, Le, 0;
    LLeUn, "lle_un", Int, Long, Long, __, 0;
    LGt, "lgt", Int, Long, Long, Gt, 0;
    LGtUn, "lgt_un", Int, Long, Long, __, 0;
    LGe, "lge", Int, Long, Long, Ge, 0;
    LGeUn, "lge_un", Int, Long, Long, __, 0;
    FEq, "feq", Int, Float32, Float32, Eq, 0;
    FNe, "fne", Int, Float32, Float32, Ne, 0;
    FLt, "flt", Int, Float32, Float32, Lt, 0;
    FLe, "fle", Int, Float32, Float32, Le, 0;
    FGt, "fgt", Int, Float32, Float32, Gt, 0;
    FGe, "fge", Int, Float32, Float32, Ge, 0;
    FEqInv, "feq_inv", Int, Float32, Float32, __, 0;
    FNeInv, "fne_inv", Int, Float32, Float32, __, 0;
    FLtInv, "flt_inv", Int, Float32, Float32, __, 0;
    FLeInv, "fle_inv", Int, Float32, Float32, __, 0;
    FGtInv, "fgt_inv", Int, Float32, Float32, __, 0;
    FGeInv, "fge_inv", Int, Float32, Float32, __, 0;
    DEq, "deq", Int, Float64, Float64, Eq, 0;
    DNe, "dne", Int, Float64, Float64, Ne, 0;
    DLt, "dlt", Int, Float64, Float64, Lt, 0;
    DLe, "dle", Int, Float64, Float64, Le, 0;
    DGt, "dgt", Int, Float64, Float64, Gt, 0;
    DGe, "dge", Int, Float64, Float64, Ge, 0;
    DEqInv, "deq_inv", Int, Float64, Float64, __, 0;
    DNeInv, "dne_inv", Int, Float64, Float64, __, 0;
    DLtInv, "dlt_inv", Int, Float64, Float64, __, 0;
    DLeInv, "dle_inv", Int, Float64, Float64, __, 0;
    DGtInv, "dgt_inv", Int, Float64, Float64, __, 0;
    DGeInv, "dge_inv", Int, Float64, Float64, __, 0;
    NFEq, "nfeq", Int, NFloat, NFloat, Eq, 0;
    NFNe, "nfne", Int, NFloat, NFloat, Ne, 0;
    NFLt, "nflt", Int, NFloat, NFloat, Lt, 0;
    NFLe, "nfle", Int, NFloat, NFloat, Le, 0;
    NFGt, "nfgt", Int, NFloat, NFloat, Gt, 0;
    NFGe, "nfge", Int, NFloat, NFloat, Ge, 0;
    NFEqInv, "nfeq_inv", Int, NFloat, NFloat, __, 0;
    NFNeInv, "nfne_inv", Int, NFloat, NFloat, __, 0;
    NFLtInv, "nflt_inv", Int, NFloat, NFloat, __, 0;
    NFLeInv, "nfle_inv", Int, NFloat, NFloat, __, 0;
    NFGtInv, "nfgt_inv", Int, NFloat, NFloat, __, 0;
    NFGeInv, "nfge_inv", Int, NFloat, NFloat, __, 0;
    IsFNan, "is_fnan", Int, Float32, Empty, __, 0;
    IsFInf, "is_finf", Int, Float32, Empty, __, 0;
    IsFFinite, "is_ffinite", Int, Float32, Empty, __, 0;
    IsDNan, "is_dnan", Int, Float64, Empty, __, 0;
    IsDInf, "is_dinf", Int, Float64, Empty, __, 0;
    IsDFinite, "is_dfinite", Int, Float64, Empty, __, 0;
    IsNFNan, "is_nfnan", Int, NFloat, Empty, __, 0;
    IsNFInf, "is_nfinf", Int, NFloat, Empty, __, 0;
    IsNFFinite, "is_nffinite", Int, NFloat, Empty, __, 0;

    // Math library
    FAcos, "facos", Float32, Float32, Empty, __, 0;
    FAsin, "fasin", Float32, Float32, Empty, __, 0;
    FAtan, "fatan", Float32, Float32, Empty, __, 0;
    FAtan2, "fatan2", Float32, Float32, Float32, __, 0;
    FCeil, "fceil", Float32, Float32, Empty, __, 0;
    FCos, "fcos", Float32, Float32, Empty, __, 0;
    FCosh, "fcosh", Float32, Float32, Empty, __, 0;
    FExp, "fexp", Float32, Float32, Empty, __, 0;
    FFloor, "ffloor", Float32, Float32, Empty, __, 0;
    FLog, "flog", Float32, Float32, Empty, __, 0;
    FLog10, "flog10", Float32, Float32, Empty, __, 0;
    FPow, "fpow", Float32, Float32, Float32, __, 0;
    FRint, "frint", Float32, Float32, Empty, __, 0;
    FRound, "fround", Float32, Float32, Empty, __, 0;
    FSin, "fsin", Float32, Float32, Empty, __, 0;
    FSinh, "fsinh", Float32, Float32, Empty, __, 0;
    FSqrt, "fsqrt", Float32, Float32, Empty, __, 0;
    FTan, "ftan", Float32, Float32, Empty, __, 0;
    FTanh, "ftanh", Float32, Float32, Empty, __, 0;
    DAcos, "dacos", Float64, Float64, Empty, __, 0;
    DAsin, "dasin", Float64, Float64, Empty, __, 0;
    DAtan, "datan", Float64, Float64, Empty, __, 0;
    DAtan2, "datan2", Float64, Float64, Float64, __, 0;
    DCeil, "dceil", Float64, Float64, Empty, __, 0;
    DCos, "dcos", Float64, Float64, Empty, __, 0;
    DCosh, "dcosh", Float64, Float64, Empty, __, 0;
    DExp, "dexp", Float64, Float64, Empty, __, 0;
    DFloor, "dfloor", Float64, Float64, Empty, __, 0;
    DLog, "dlog", Float64, Float64, Empty, __, 0;
    DLog10, "dlog10", Float64, Float64, Empty, __, 0;
    DPow, "dpow", Float64, Float64, Float64, __, 0;
    DRint, "drint", Float64, Float64, Empty, __, 0;
    DRound, "dround", Float64, Float64, Empty, __, 0;
    DSin, "dsin", Float64, Float64, Empty, __, 0;
    DSinh, "dsinh", Float64, Float64, Empty, __, 0;
    DSqrt, "dsqrt", Float64, Float64, Empty, __, 0;
    DTan, "dtan", Float64, Float64, Empty, __, 0;
    DTanh, "dtanh", Float64, Float64, Empty, __, 0;
    NFAcos, "nfacos", NFloat, NFloat, Empty, __, 0;
    NFAsin, "nfasin", NFloat, NFloat, Empty, __, 0;
    NFAtan, "nfatan", NFloat, NFloat, Empty, __, 0;
    NFAtan2, "nfatan2", NFloat, NFloat, NFloat, __, 0;
    NFCeil, "nfceil", NFloat, NFloat, Empty, __, 0;
    NFCos, "nfcos", NFloat, NFloat, Empty, __, 0;
    NFCosh, "nfcosh", NFloat, NFloat, Empty, __, 0;
    NFExp, "nfexp", NFloat, NFloat, Empty, __, 0;
    NFFloor, "nffloor", NFloat, NFloat, Empty, __, 0;
    NFLog, "nflog", NFloat, NFloat, Empty, __, 0;
    NFLog10, "nflog10", NFloat, NFloat, Empty, __, 0;
    NFPow, "nfpow", NFloat, NFloat, NFloat, __, 0;
    NFRint, "nfrint", NFloat, NFloat, Empty, __, 0;
    NFRound, "nfround", NFloat, NFloat, Empty, __, 0;
    NFSin, "nfsin", NFloat, NFloat, Empty, __, 0;
    NFSinh, "nfsinh", NFloat, NFloat, Empty, __, 0;
    NFSqrt, "nfsqrt", NFloat, NFloat, Empty, __, 0;
    NFTan, "nftan", NFloat, NFloat, Empty, __, 0;
    NFTanh, "nftanh", NFloat, NFloat, Empty, __, 0;

    // Absolute, minimum, maximum, sign
    IAbs, "iabs", Int, Int, Empty, __, 0;
    LAbs, "labs", Long, Long, Empty, __, 0;
    FAbs, "fabs", Float32, Float32, Empty, __, 0;
    DAbs, "dabs", Float64, Float64, Empty, __, 0;
    NFAbs, "nfabs", NFloat, NFloat, Empty, __, 0;
    IMin, "imin", Int, Int, Int, __, 0;
    IMinUn, "imin_un", Int, Int, Int, __, 0;
    LMin, "lmin", Long, Long, Long, __, 0;
    LMinUn, "lmin_un", Long, Long, Long, __, 0;
    FMin, "fmin", Float32, Float32, Float32, __, 0;
    DMin, "dmin", Float64, Float64, Float64, __, 0;
    NFMin, "nfmin", NFloat, NFloat, NFloat, __, 0;
    IMax, "imax", Int, Int, Int, __, 0;
    IMaxUn, "imax_un", Int, Int, Int, __, 0;
    LMax, "lmax", Long, Long, Long, __, 0;
    LMaxUn, "lmax_un", Long, Long, Long, __, 0;
    FMax, "fmax", Float32, Float32, Float32, __, 0;
    DMax, "dmax", Float64, Float64, Float64, __, 0;
    NFMax, "nfmax", NFloat, NFloat, NFloat, __, 0;
    ISign, "isign", Int, Int, Empty, __, 0;
    LSign, "lsign", Int, Long, Empty, __, 0;
    FSign, "fsign", Int, Float32, Empty, __, 0;
    DSign, "dsign", Int, Float64, Empty, __, 0;
    NFSign, "nfsign", Int, NFloat, Empty, __, 0;

    // Pointer checks
    CheckNull, "check_null", Empty, Ptr, Empty, __, 0;

    // Calls and returns
    Call, "call", Empty, Empty, Empty, __, IS_CALL;
    CallTail, "call_tail", Empty, Empty, Empty, __, IS_CALL;
    CallIndirect, "call_indirect", Empty, Ptr, Empty, __, 0;
    CallIndirectTail, "call_indirect_tail", Empty, Ptr, Empty, __, 0;
    CallVtablePtr, "call_vtable_ptr", Empty, Ptr, Empty, __, 0;
    CallVtablePtrTail, "call_vtable_ptr_tail", Empty, Ptr, Empty, __, 0;
    CallExternal, "call_external", Empty, Empty, Empty, __, IS_CALL_EXTERNAL;
    CallExternalTail, "call_external_tail", Empty, Empty, Empty, __, IS_CALL_EXTERNAL;
    Return, "return", Empty, Empty, Empty, __, 0;
    ReturnInt, "return_int", Empty, Int, Empty, __, 0;
    ReturnLong, "return_long", Empty, Long, Empty, __, 0;
    ReturnFloat32, "return_float32", Empty, Float32, Empty, __, 0;
    ReturnFloat64, "return_float64", Empty, Float64, Empty, __, 0;
    ReturnNFloat, "return_nfloat", Empty, NFloat, Empty, __, 0;
    ReturnSmallStruct, "return_small_struct", Empty, Ptr, Ptr, __, NINT_ARG;
    SetupForNested, "setup_for_nested", Empty, Int, Empty, __, 0;
    SetupForSibling, "setup_for_sibling", Empty, Int, Int, __, NINT_ARG;
    Import, "import", Ptr, Any, Int, __, 0;

    // Exception handling
    Throw, "throw", Empty, Ptr, Empty, __, 0;
    Rethrow, "rethrow", Empty, Ptr, Empty, __, 0;
    LoadPc, "load_pc", Ptr, Empty, Empty, __, 0;
    LoadExceptionPc, "load_exception_pc", Ptr, Empty, Empty, __, 0;
    EnterFinally, "enter_finally", Empty, Empty, Empty, __, 0;
    LeaveFinally, "leave_finally", Empty, Empty, Empty, __, 0;
    CallFinally, "call_finally", Empty, Empty, Empty, __, IS_BRANCH;
    EnterFilter, "enter_filter", Any, Empty, Empty, __, 0;
    LeaveFilter, "leave_filter", Empty, Any, Empty, __, 0;
    CallFilter, "call_filter", Any, Empty, Empty, __, IS_BRANCH;
    CallFilterReturn, "call_filter_return", Any, Empty, Empty, __, 0;
    AddressOfLabel, "address_of_label", Ptr, Empty, Empty, __, IS_ADDROF_LABEL;

    // Data manipulation
    CopyLoadSByte, "copy_load_sbyte", Int, Int, Empty, __, 0;
    CopyLoadUByte, "copy_load_ubyte", Int, Int, Empty, __, 0;
    CopyLoadShort, "copy_load_short", Int, Int, Empty, __, 0;
    CopyLoadUShort, "copy_load_ushort", Int, Int, Empty, __, 0;
    CopyInt, "copy_int", Int, Int, Empty, Copy, 0;
    CopyLong, "copy_long", Long, Long, Empty, Copy, 0;
    CopyFloat32, "copy_float32", Float32, Float32, Empty, Copy, 0;
    CopyFloat64, "copy_float64", Float64, Float64, Empty, Copy, 0;
    CopyNFloat, "copy_nfloat", NFloat, NFloat, Empty, Copy, 0;
    CopyStruct, "copy_struct", Ptr, Ptr, Empty, Copy, NINT_ARG;
    CopyStoreByte, "copy_store_byte", Int, Int, Empty, __, 0;
    CopyStoreShort, "copy_store_short", Int, Int, Empty, __, 0;
    AddressOf, "address_of", Ptr, Any, Empty, AddressOf, 0;

    // Register and stack plumbing
    IncomingReg, "incoming_reg", Empty, Empty, Empty, __, IS_REG;
    IncomingFramePosn, "incoming_frame_posn", Empty, Any, Int, __, 0;
    OutgoingReg, "outgoing_reg", Empty, Empty, Empty, __, IS_REG;
    OutgoingFramePosn, "outgoing_frame_posn", Empty, Any, Int, __, 0;
    ReturnReg, "return_reg", Empty, Empty, Empty, __, IS_REG;
    PushInt, "push_int", Empty, Int, Empty, __, 0;
    PushLong, "push_long", Empty, Long, Empty, __, 0;
    PushFloat32, "push_float32", Empty, Float32, Empty, __, 0;
    PushFloat64, "push_float64", Empty, Float64, Empty, __, 0;
    PushNFloat, "push_nfloat", Empty, NFloat, Empty, __, 0;
    PushStruct, "push_struct", Empty, Any, Ptr, __, NINT_ARG;
    PopStack, "pop_stack", Empty, Int, Empty, __, NINT_ARG;
    FlushSmallStruct, "flush_small_struct", Empty, Any, Empty, __, NINT_ARG;
    SetParamInt, "set_param_int", Empty, Int, Ptr, __, 0;
    SetParamLong, "set_param_long", Empty, Long, Ptr, __, 0;
    SetParamFloat32, "set_param_float32", Empty, Float32, Ptr, __, 0;
    SetParamFloat64, "set_param_float64", Empty, Float64, Ptr, __, 0;
    SetParamNFloat, "set_param_nfloat", Empty, NFloat, Ptr, __, 0;
    SetParamStruct, "set_param_struct", Ptr, Ptr, Ptr, __, 0;
    PushReturnAreaPtr, "push_return_area_ptr", Empty, Empty, Empty, __, 0;

    // Pointer-relative loads and stores
    LoadRelativeSByte, "load_relative_sbyte", Int, Ptr, Int, __, NINT_ARG;
    LoadRelativeUByte, "load_relative_ubyte", Int, Ptr, Int, __, NINT_ARG;
    LoadRelativeShort, "load_relative_short", Int, Ptr, Int, __, NINT_ARG;
    LoadRelativeUShort, "load_relative_ushort", Int, Ptr, Int, __, NINT_ARG;
    LoadRelativeInt, "load_relative_int", Int, Ptr, Int, __, NINT_ARG;
    LoadRelativeLong, "load_relative_long", Long, Ptr, Int, __, NINT_ARG;
    LoadRelativeFloat32, "load_relative_float32", Float32, Ptr, Int, __, NINT_ARG;
    LoadRelativeFloat64, "load_relative_float64", Float64, Ptr, Int, __, NINT_ARG;
    LoadRelativeNFloat, "load_relative_nfloat", NFloat, Ptr, Int, __, NINT_ARG;
    LoadRelativeStruct, "load_relative_struct", Any, Ptr, Int, __, NINT_ARG_TWO;
    StoreRelativeByte, "store_relative_byte", Ptr, Int, Int, __, NINT_ARG;
    StoreRelativeShort, "store_relative_short", Ptr, Int, Int, __, NINT_ARG;
    StoreRelativeInt, "store_relative_int", Ptr, Int, Int, __, NINT_ARG;
    StoreRelativeLong, "store_relative_long", Ptr, Long, Int, __, NINT_ARG;
    StoreRelativeFloat32, "store_relative_float32", Ptr, Float32, Int, __, NINT_ARG;
    StoreRelativeFloat64, "store_relative_float64", Ptr, Float64, Int, __, NINT_ARG;
    StoreRelativeNFloat, "store_relative_nfloat", Ptr, NFloat, Int, __, NINT_ARG;
    StoreRelativeStruct, "store_relative_struct", Ptr, Any, Int, __, NINT_ARG_TWO;
    AddRelative, "add_relative", Ptr, Ptr, Int, __, NINT_ARG;

    // Array element loads and stores
    LoadElementSByte, "load_element_sbyte", Int, Ptr, Int, __, 0;
    LoadElementUByte, "load_element_ubyte", Int, Ptr, Int, __, 0;
    LoadElementShort, "load_element_short", Int, Ptr, Int, __, 0;
    LoadElementUShort, "load_element_ushort", Int, Ptr, Int, __, 0;
    LoadElementInt, "load_element_int", Int, Ptr, Int, __, 0;
    LoadElementLong, "load_element_long", Long, Ptr, Int, __, 0;
    LoadElementFloat32, "load_element_float32", Float32, Ptr, Int, __, 0;
    LoadElementFloat64, "load_element_float64", Float64, Ptr, Int, __, 0;
    LoadElementNFloat, "load_element_nfloat", NFloat, Ptr, Int, __, 0;
    StoreElementByte, "store_element_byte", Ptr, Int, Int, __, 0;
    StoreElementShort, "store_element_short", Ptr, Int, Int, __, 0;
    StoreElementInt, "store_element_int", Ptr, Int, Int, __, 0;
    StoreElementLong, "store_element_long", Ptr, Int, Long, __, 0;
    StoreElementFloat32, "store_element_float32", Ptr, Int, Float32, __, 0;
    StoreElementFloat64, "store_element_float64", Ptr, Int, Float64, __, 0;
    StoreElementNFloat, "store_element_nfloat", Ptr, Int, NFloat, __, 0;

    // Block operations
    Memcpy, "memcpy", Ptr, Ptr, Ptr, __, 0;
    Memmove, "memmove", Ptr, Ptr, Ptr, __, 0;
    Memset, "memset", Ptr, Int, Ptr, __, 0;

    // Stack allocation
    Alloca, "alloca", Ptr, Ptr, Empty, __, 0;

    // Debugging
    MarkOffset, "mark_offset", Empty, Int, Empty, __, NINT_ARG;
    MarkBreakpoint, "mark_breakpoint", Empty, Ptr, Ptr, __, NINT_ARG_TWO;

    // Switch statements
    JumpTable, "jump_table", Any, Ptr, Int, __, IS_JUMP_TABLE;
}

impl Opcode {
    /// Static metadata for this opcode
    pub fn info(self) -> &'static OpcodeInfo {
        &OPCODE_INFO[self as usize]
    }

    /// Lower-case mnemonic, matching the traditional opcode names
    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn is_branch(self) -> bool {
        self.info().flags & IS_BRANCH != 0
    }

    pub fn is_call(self) -> bool {
        self.info().flags & (IS_CALL | IS_CALL_EXTERNAL) != 0
    }

    pub fn is_jump_table(self) -> bool {
        self.info().flags & IS_JUMP_TABLE != 0
    }

    pub fn is_reg_move(self) -> bool {
        self.info().flags & IS_REG != 0
    }

    /// Semantic operator, where one exists
    pub fn operator(self) -> Option<Operator> {
        self.info().oper
    }

    /// Whether this opcode unconditionally leaves the current block
    pub fn ends_block(self) -> bool {
        matches!(
            self,
            Opcode::Br
                | Opcode::Return
                | Opcode::ReturnInt
                | Opcode::ReturnLong
                | Opcode::ReturnFloat32
                | Opcode::ReturnFloat64
                | Opcode::ReturnNFloat
                | Opcode::ReturnSmallStruct
                | Opcode::Throw
                | Opcode::Rethrow
                | Opcode::JumpTable
        )
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_aligned_with_enum() {
        assert_eq!(Opcode::Nop.name(), "nop");
        assert_eq!(Opcode::IAdd.name(), "iadd");
        assert_eq!(Opcode::JumpTable.name(), "jump_table");
        assert_eq!(Opcode::JumpTable as usize, NUM_OPCODES - 1);
    }

    #[test]
    fn test_operator_classification() {
        assert_eq!(Opcode::IAdd.operator(), Some(Operator::Add));
        assert_eq!(Opcode::IAddOvf.operator(), None);
        assert_eq!(Opcode::DGe.operator(), Some(Operator::Ge));
        assert_eq!(Opcode::CopyInt.operator(), Some(Operator::Copy));
    }

    #[test]
    fn test_flag_classification() {
        assert!(Opcode::Br.is_branch());
        assert!(Opcode::BrIEq.is_branch());
        assert!(!Opcode::IEq.is_branch());
        assert!(Opcode::Call.is_call());
        assert!(Opcode::CallExternal.is_call());
        assert!(Opcode::JumpTable.is_jump_table());
        assert!(Opcode::IncomingReg.is_reg_move());
    }

    #[test]
    fn test_operand_kinds() {
        let info = Opcode::LShl.info();
        assert_eq!(info.dest, OperandKind::Long);
        assert_eq!(info.src1, OperandKind::Long);
        assert_eq!(info.src2, OperandKind::Int);

        let info = Opcode::LoadRelativeLong.info();
        assert_eq!(info.dest, OperandKind::Long);
        assert_eq!(info.src1, OperandKind::Ptr);
        assert!(info.flags & opflags::NINT_ARG != 0);
    }

    #[test]
    fn test_terminators() {
        assert!(Opcode::Return.ends_block());
        assert!(Opcode::Throw.ends_block());
        assert!(!Opcode::BrIEq.ends_block());
        assert!(!Opcode::IAdd.ends_block());
    }
}
