//! Type descriptors
//!
//! Every value, signature, and memory access in the IR is described by a
//! `Type`. A `Type` is a cheaply clonable handle (clone = take a reference,
//! drop = release it); the pre-defined primitives are process-wide singletons
//! and identity for them is handle equality. Aggregate layout (size,
//! alignment, field offsets) is computed lazily, at most once per mutation.

use std::any::Any;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::Mutex;

/// Calling convention attached to a signature type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Abi {
    /// Native C calling convention of the platform
    #[default]
    Cdecl,
    /// Native C convention with a trailing variable argument list
    VarArg,
    /// Win32 STDCALL (callee pops); same as Cdecl elsewhere
    StdCall,
    /// Win32 FASTCALL (first two words in registers); same as Cdecl elsewhere
    FastCall,
}

/// What a type descriptor describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Void,
    SByte,
    UByte,
    Short,
    UShort,
    Int,
    UInt,
    NInt,
    NUInt,
    Long,
    ULong,
    Float32,
    Float64,
    NFloat,
    Struct,
    Union,
    Signature,
    Ptr,
    /// User tag wrapper; the payload does not change layout
    Tagged(u32),
}

impl TypeKind {
    /// Primitive kinds (everything up to and including NFloat)
    pub fn is_primitive(self) -> bool {
        !matches!(
            self,
            TypeKind::Struct
                | TypeKind::Union
                | TypeKind::Signature
                | TypeKind::Ptr
                | TypeKind::Tagged(_)
        )
    }
}

/// Host-platform layout constants consulted by the type system and back ends
pub mod host {
    /// Size and alignment of a native pointer / nint / nuint
    pub const POINTER_SIZE: u64 = core::mem::size_of::<usize>() as u64;

    /// Strictest alignment the code cache hands out for auxiliary data
    pub const BEST_ALIGNMENT: u64 = 16;

    /// Whether loads and stores may cross natural alignment boundaries
    pub const ALLOWS_UNALIGNED: bool =
        cfg!(any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64"));

    /// Bit i set iff an aggregate of size i+1 bytes is returned in registers.
    ///
    /// On x86-64 SysV and AArch64 AAPCS aggregates of up to 16 bytes come
    /// back in the return register pair; everything larger goes through a
    /// hidden pointer.
    pub const RETURN_IN_REG: [u8; 8] = [0xff, 0xff, 0, 0, 0, 0, 0, 0];
}

// Offset bookkeeping matches the original encoding: the high bit marks an
// offset the layout pass computed itself (and may recompute); all-ones means
// not laid out yet.
const OFFSET_INTERNAL: u64 = 1 << 63;
const OFFSET_NOT_SET: u64 = u64::MAX;

const LAYOUT_NEEDED: u8 = 1;
const LAYOUT_EXPLICIT_SIZE: u8 = 2;
const LAYOUT_EXPLICIT_ALIGN: u8 = 4;

#[derive(Debug)]
struct LayoutState {
    flags: u8,
    size: u64,
    alignment: u64,
    offsets: Vec<u64>,
    names: Vec<Option<String>>,
}

struct TaggedState {
    kind: u32,
    data: Mutex<Option<Arc<dyn Any + Send + Sync>>>,
}

struct TypeData {
    kind: TypeKind,
    /// Pre-defined singleton; mutators are no-ops on these
    fixed: bool,
    abi: Abi,
    /// Element type (pointer), return type (signature), underlying (tagged).
    /// Mutable only for tagged types (forward declarations).
    sub: Mutex<Option<Type>>,
    /// Field types (struct/union) or parameter types (signature)
    components: Vec<Type>,
    layout: Mutex<LayoutState>,
    tagged: Option<TaggedState>,
}

/// Reference-counted type descriptor handle
#[derive(Clone)]
pub struct Type(Arc<TypeData>);

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Type {}

impl Hash for Type {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Arc::as_ptr(&self.0) as usize).hash(state);
    }
}

impl std::fmt::Debug for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Type({:?})", self.0.kind)
    }
}

fn new_data(kind: TypeKind, size: u64, alignment: u64) -> TypeData {
    TypeData {
        kind,
        fixed: false,
        abi: Abi::Cdecl,
        sub: Mutex::new(None),
        components: Vec::new(),
        layout: Mutex::new(LayoutState {
            flags: 0,
            size,
            alignment,
            offsets: Vec::new(),
            names: Vec::new(),
        }),
        tagged: None,
    }
}

macro_rules! primitive_singleton {
    ($static_name:ident, $fn_name:ident, $kind:expr, $size:expr, $align:expr, $doc:literal) => {
        static $static_name: Lazy<Type> = Lazy::new(|| {
            let mut data = new_data($kind, $size, $align);
            data.fixed = true;
            Type(Arc::new(data))
        });

        impl Type {
            #[doc = $doc]
            pub fn $fn_name() -> Type {
                $static_name.clone()
            }
        }
    };
}

primitive_singleton!(VOID, void, TypeKind::Void, 1, 1, "The void type");
primitive_singleton!(SBYTE, sbyte, TypeKind::SByte, 1, 1, "Signed 8-bit integer");
primitive_singleton!(UBYTE, ubyte, TypeKind::UByte, 1, 1, "Unsigned 8-bit integer");
primitive_singleton!(SHORT, short, TypeKind::Short, 2, 2, "Signed 16-bit integer");
primitive_singleton!(USHORT, ushort, TypeKind::UShort, 2, 2, "Unsigned 16-bit integer");
primitive_singleton!(INT, int, TypeKind::Int, 4, 4, "Signed 32-bit integer");
primitive_singleton!(UINT, uint, TypeKind::UInt, 4, 4, "Unsigned 32-bit integer");
primitive_singleton!(
    NINT,
    nint,
    TypeKind::NInt,
    host::POINTER_SIZE,
    host::POINTER_SIZE,
    "Signed integer with the size and alignment of a native pointer"
);
primitive_singleton!(
    NUINT,
    nuint,
    TypeKind::NUInt,
    host::POINTER_SIZE,
    host::POINTER_SIZE,
    "Unsigned integer with the size and alignment of a native pointer"
);
primitive_singleton!(LONG, long, TypeKind::Long, 8, 8, "Signed 64-bit integer");
primitive_singleton!(ULONG, ulong, TypeKind::ULong, 8, 8, "Unsigned 64-bit integer");
primitive_singleton!(FLOAT32, float32, TypeKind::Float32, 4, 4, "32-bit float");
primitive_singleton!(FLOAT64, float64, TypeKind::Float64, 8, 8, "64-bit float");
primitive_singleton!(
    NFLOAT,
    nfloat,
    TypeKind::NFloat,
    8,
    8,
    "Widest native float (f64 on this host)"
);

static VOID_PTR: Lazy<Type> = Lazy::new(|| {
    let mut data = new_data(TypeKind::Ptr, host::POINTER_SIZE, host::POINTER_SIZE);
    data.fixed = true;
    data.sub = Mutex::new(Some(Type::void()));
    Type(Arc::new(data))
});

impl Type {
    /// The shared `void *` type
    pub fn void_ptr() -> Type {
        VOID_PTR.clone()
    }

    fn new_aggregate(kind: TypeKind, fields: Vec<Type>) -> Type {
        let num = fields.len();
        let mut data = new_data(kind, 0, 1);
        data.components = fields;
        {
            let layout = data.layout.get_mut();
            layout.flags = LAYOUT_NEEDED;
            layout.offsets = vec![OFFSET_NOT_SET; num];
            layout.names = vec![None; num];
        }
        Type(Arc::new(data))
    }

    /// Create a structure type. A structure with no fields has size zero.
    pub fn structure(fields: &[Type]) -> Type {
        Self::new_aggregate(TypeKind::Struct, fields.to_vec())
    }

    /// Create a union type; every field lives at offset zero.
    pub fn union_of(fields: &[Type]) -> Type {
        Self::new_aggregate(TypeKind::Union, fields.to_vec())
    }

    /// Create a function signature type.
    ///
    /// Used as a struct field, a signature lays out like a pointer: it
    /// stands for a pointer to a function with these parameters.
    pub fn signature(abi: Abi, return_type: Type, params: &[Type]) -> Type {
        let num = params.len();
        let mut data = new_data(TypeKind::Signature, 0, host::POINTER_SIZE);
        data.abi = abi;
        data.sub = Mutex::new(Some(return_type));
        data.components = params.to_vec();
        {
            let layout = data.layout.get_mut();
            layout.offsets = vec![OFFSET_NOT_SET; num];
            layout.names = vec![None; num];
        }
        Type(Arc::new(data))
    }

    /// Create a pointer type. Pointer-to-void collapses to the shared
    /// `void_ptr` singleton.
    pub fn pointer(to: &Type) -> Type {
        if to.kind() == TypeKind::Void {
            return Type::void_ptr();
        }
        let mut data = new_data(TypeKind::Ptr, host::POINTER_SIZE, host::POINTER_SIZE);
        data.sub = Mutex::new(Some(to.clone()));
        Type(Arc::new(data))
    }

    /// Wrap `underlying` with a user tag. The payload travels with the type
    /// and is dropped when the last handle goes away; layout is unchanged.
    pub fn tagged(
        underlying: &Type,
        kind: u32,
        data: Option<Arc<dyn Any + Send + Sync>>,
    ) -> Type {
        let mut td = new_data(TypeKind::Tagged(kind), 0, 1);
        td.sub = Mutex::new(Some(underlying.clone()));
        td.tagged = Some(TaggedState {
            kind,
            data: Mutex::new(data),
        });
        Type(Arc::new(td))
    }

    /// Identity comparison (same descriptor object)
    pub fn ptr_eq(&self, other: &Type) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// The kind of this descriptor
    pub fn kind(&self) -> TypeKind {
        self.0.kind
    }

    /// Whether this is one of the pre-defined singletons
    pub fn is_fixed(&self) -> bool {
        self.0.fixed
    }

    pub fn is_primitive(&self) -> bool {
        self.0.kind.is_primitive()
    }

    pub fn is_struct(&self) -> bool {
        self.0.kind == TypeKind::Struct
    }

    pub fn is_union(&self) -> bool {
        self.0.kind == TypeKind::Union
    }

    pub fn is_signature(&self) -> bool {
        self.0.kind == TypeKind::Signature
    }

    pub fn is_pointer(&self) -> bool {
        self.0.kind == TypeKind::Ptr
    }

    pub fn is_tagged(&self) -> bool {
        matches!(self.0.kind, TypeKind::Tagged(_))
    }

    /// ABI selector of a signature; Cdecl for everything else
    pub fn abi(&self) -> Abi {
        self.0.abi
    }

    fn sub(&self) -> Option<Type> {
        self.0.sub.lock().clone()
    }

    /// Size of the type in bytes
    pub fn size(&self) -> u64 {
        match self.0.kind {
            // A signature used as a value is a function pointer
            TypeKind::Signature => host::POINTER_SIZE,
            TypeKind::Tagged(_) => self.sub().map_or(0, |t| t.size()),
            _ => self.layout().size,
        }
    }

    /// Alignment of the type in bytes
    pub fn alignment(&self) -> u64 {
        match self.0.kind {
            TypeKind::Tagged(_) => self.sub().map_or(1, |t| t.alignment()),
            _ => self.layout().alignment,
        }
    }

    /// Number of fields in a struct or union; zero otherwise
    pub fn num_fields(&self) -> usize {
        match self.0.kind {
            TypeKind::Struct | TypeKind::Union => self.0.components.len(),
            _ => 0,
        }
    }

    /// Type of a struct or union field
    pub fn field(&self, index: usize) -> Option<Type> {
        match self.0.kind {
            TypeKind::Struct | TypeKind::Union => self.0.components.get(index).cloned(),
            _ => None,
        }
    }

    /// Byte offset of a struct field; zero for invalid indices and
    /// non-aggregates, so it is safe to call on anything
    pub fn offset(&self, index: usize) -> u64 {
        if !matches!(self.0.kind, TypeKind::Struct | TypeKind::Union) {
            return 0;
        }
        let layout = self.layout();
        match layout.offsets.get(index) {
            Some(&off) => off & !OFFSET_INTERNAL,
            None => 0,
        }
    }

    /// Name of a field or parameter, if one was set
    pub fn name(&self, index: usize) -> Option<String> {
        self.0.layout.lock().names.get(index).cloned().flatten()
    }

    /// Find a field or parameter index by name
    pub fn find_name(&self, name: &str) -> Option<usize> {
        let layout = self.0.layout.lock();
        layout
            .names
            .iter()
            .position(|n| n.as_deref() == Some(name))
    }

    /// Number of parameters in a signature; zero otherwise
    pub fn num_params(&self) -> usize {
        match self.0.kind {
            TypeKind::Signature => self.0.components.len(),
            _ => 0,
        }
    }

    /// A signature parameter type
    pub fn param(&self, index: usize) -> Option<Type> {
        match self.0.kind {
            TypeKind::Signature => self.0.components.get(index).cloned(),
            _ => None,
        }
    }

    /// Return type of a signature
    pub fn return_type(&self) -> Option<Type> {
        match self.0.kind {
            TypeKind::Signature => self.sub(),
            _ => None,
        }
    }

    /// Pointed-to type of a pointer
    pub fn ref_type(&self) -> Option<Type> {
        match self.0.kind {
            TypeKind::Ptr => self.sub(),
            _ => None,
        }
    }

    /// Underlying type of a tag wrapper
    pub fn tagged_type(&self) -> Option<Type> {
        match self.0.kind {
            TypeKind::Tagged(_) => self.sub(),
            _ => None,
        }
    }

    /// Replace the underlying type of a tag wrapper. Used to flesh out a
    /// forward-declared type once the definition is known.
    pub fn set_tagged_type(&self, underlying: &Type) {
        if self.is_tagged() {
            *self.0.sub.lock() = Some(underlying.clone());
        }
    }

    /// Tag kind of a tag wrapper
    pub fn tagged_kind(&self) -> Option<u32> {
        self.0.tagged.as_ref().map(|t| t.kind)
    }

    /// User payload of a tag wrapper
    pub fn tagged_data(&self) -> Option<Arc<dyn Any + Send + Sync>> {
        self.0.tagged.as_ref().and_then(|t| t.data.lock().clone())
    }

    /// Replace the user payload of a tag wrapper; the old payload is dropped
    pub fn set_tagged_data(&self, data: Option<Arc<dyn Any + Send + Sync>>) {
        if let Some(tagged) = &self.0.tagged {
            *tagged.data.lock() = data;
        }
    }

    /// Set field or parameter names. Extra names beyond the component count
    /// are ignored. No-op on fixed types.
    pub fn set_names(&self, names: &[&str]) {
        if self.0.fixed {
            return;
        }
        if matches!(
            self.0.kind,
            TypeKind::Struct | TypeKind::Union | TypeKind::Signature
        ) {
            let mut layout = self.0.layout.lock();
            for (slot, name) in layout.names.iter_mut().zip(names) {
                *slot = Some((*name).to_string());
            }
        }
    }

    /// Explicitly set the size and alignment of a struct or union; −1 means
    /// "compute automatically". An explicit size never shrinks below the
    /// computed layout. Ignored for other kinds.
    pub fn set_size_and_alignment(&self, size: i64, alignment: i64) {
        if self.0.fixed || !matches!(self.0.kind, TypeKind::Struct | TypeKind::Union) {
            return;
        }
        let mut layout = self.0.layout.lock();
        if size >= 0 {
            layout.size = size as u64;
            layout.flags |= LAYOUT_EXPLICIT_SIZE;
        } else {
            layout.flags &= !LAYOUT_EXPLICIT_SIZE;
        }
        if alignment >= 0 {
            layout.alignment = alignment as u64;
            layout.flags |= LAYOUT_EXPLICIT_ALIGN;
        } else {
            layout.flags &= !LAYOUT_EXPLICIT_ALIGN;
        }
        layout.flags |= LAYOUT_NEEDED;
    }

    /// Explicitly set a field offset. Ignored for non-structs and
    /// out-of-range indices.
    pub fn set_offset(&self, field_index: usize, offset: u64) {
        if self.0.fixed || !matches!(self.0.kind, TypeKind::Struct | TypeKind::Union) {
            return;
        }
        let mut layout = self.0.layout.lock();
        if field_index < layout.offsets.len() {
            layout.offsets[field_index] = offset & !OFFSET_INTERNAL;
            layout.flags |= LAYOUT_NEEDED;
        }
    }

    fn layout(&self) -> parking_lot::MutexGuard<'_, LayoutState> {
        let mut layout = self.0.layout.lock();
        if (layout.flags & LAYOUT_NEEDED) != 0 {
            self.perform_layout(&mut layout);
        }
        layout
    }

    /// Lay out an aggregate. Runs at most once per mutation.
    fn perform_layout(&self, layout: &mut LayoutState) {
        let mut size: u64 = 0;
        let mut max_size: u64 = 0;
        let mut max_align: u64 = 1;

        let align_limit = if (layout.flags & LAYOUT_EXPLICIT_ALIGN) != 0 {
            layout.alignment
        } else {
            0
        };

        for (index, field) in self.0.components.iter().enumerate() {
            let field_size = field.size();
            let mut field_align = field.alignment().max(1);
            if align_limit != 0 && field_align > align_limit {
                field_align = align_limit;
            }

            if self.0.kind == TypeKind::Struct {
                if (layout.offsets[index] & OFFSET_INTERNAL) != 0 {
                    if size % field_align != 0 {
                        size += field_align - (size % field_align);
                    }
                    layout.offsets[index] = OFFSET_INTERNAL | size;
                    size += field_size;
                } else {
                    size = layout.offsets[index] + field_size;
                }
                max_size = max_size.max(size);
            } else {
                // Union: every field at offset zero; size is the largest
                // field rounded to its own alignment
                layout.offsets[index] = OFFSET_INTERNAL;
                let mut rounded = field_size;
                if rounded % field_align != 0 {
                    rounded += field_align - (rounded % field_align);
                }
                max_size = max_size.max(rounded);
            }
            max_align = max_align.max(field_align);
        }

        if max_size % max_align != 0 {
            max_size += max_align - (max_size % max_align);
        }

        if (layout.flags & LAYOUT_EXPLICIT_SIZE) != 0 {
            layout.size = layout.size.max(max_size);
        } else {
            layout.size = max_size;
        }
        layout.alignment = max_align;
        layout.flags &= !LAYOUT_NEEDED;
    }

    /// Strip tag wrappers without collapsing native kinds
    pub fn remove_tags(&self) -> Type {
        let mut ty = self.clone();
        while ty.is_tagged() {
            match ty.sub() {
                Some(under) => ty = under,
                None => break,
            }
        }
        ty
    }

    /// Normalize to a basic numeric form: tags stripped, nint/nuint and
    /// pointers/signatures mapped to the fixed integer of the host word
    /// size, nfloat mapped to its concrete width. Aggregates are unchanged.
    pub fn normalize(&self) -> Type {
        let ty = self.remove_tags();
        match ty.kind() {
            TypeKind::NInt | TypeKind::Ptr | TypeKind::Signature => {
                if host::POINTER_SIZE == 4 {
                    Type::int()
                } else {
                    Type::long()
                }
            }
            TypeKind::NUInt => {
                if host::POINTER_SIZE == 4 {
                    Type::uint()
                } else {
                    Type::ulong()
                }
            }
            TypeKind::NFloat => Type::float64(),
            _ => ty,
        }
    }

    /// Widen small integer kinds to 32-bit for arithmetic and calls
    pub fn promote_int(&self) -> Type {
        match self.kind() {
            TypeKind::SByte | TypeKind::UByte | TypeKind::Short | TypeKind::UShort => Type::int(),
            _ => self.clone(),
        }
    }

    /// Whether a value of this type, used as a return type, must be passed
    /// back through a hidden pointer parameter
    pub fn return_via_pointer(&self) -> bool {
        let ty = self.normalize();
        if !ty.is_struct() && !ty.is_union() {
            return false;
        }
        let size = ty.size();
        if (1..=64).contains(&size) {
            let idx = ((size - 1) / 8) as usize;
            let bit = ((size - 1) % 8) as u32;
            if (host::RETURN_IN_REG[idx] & (1 << bit)) != 0 {
                return false;
            }
        }
        true
    }

    /// The strictest alignment the host hands out
    pub fn best_alignment() -> u64 {
        host::BEST_ALIGNMENT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_identity() {
        assert!(Type::int().ptr_eq(&Type::int()));
        assert!(!Type::int().ptr_eq(&Type::uint()));
        assert_eq!(Type::int(), Type::int());
    }

    #[test]
    fn test_primitive_sizes() {
        assert_eq!(Type::sbyte().size(), 1);
        assert_eq!(Type::short().size(), 2);
        assert_eq!(Type::int().size(), 4);
        assert_eq!(Type::long().size(), 8);
        assert_eq!(Type::nint().size(), host::POINTER_SIZE);
        assert_eq!(Type::float64().alignment(), 8);
    }

    #[test]
    fn test_void_pointer_collapses() {
        let p = Type::pointer(&Type::void());
        assert!(p.ptr_eq(&Type::void_ptr()));
        assert_eq!(p.size(), host::POINTER_SIZE);
    }

    #[test]
    fn test_struct_layout() {
        // { i8, i32, i16 } → offsets 0, 4, 8; size 12; align 4
        let s = Type::structure(&[Type::sbyte(), Type::int(), Type::short()]);
        assert_eq!(s.offset(0), 0);
        assert_eq!(s.offset(1), 4);
        assert_eq!(s.offset(2), 8);
        assert_eq!(s.size(), 12);
        assert_eq!(s.alignment(), 4);
        // size is a multiple of alignment and covers every field
        assert_eq!(s.size() % s.alignment(), 0);
        for i in 0..s.num_fields() {
            let field = s.field(i).unwrap();
            assert!(s.offset(i) + field.size() <= s.size());
        }
    }

    #[test]
    fn test_union_layout() {
        let u = Type::union_of(&[Type::sbyte(), Type::long(), Type::int()]);
        assert_eq!(u.size(), 8);
        assert_eq!(u.alignment(), 8);
        assert_eq!(u.offset(0), 0);
        assert_eq!(u.offset(1), 0);
        assert_eq!(u.offset(2), 0);
    }

    #[test]
    fn test_explicit_size_never_shrinks() {
        let s = Type::structure(&[Type::int(), Type::int()]);
        s.set_size_and_alignment(4, -1);
        // computed layout needs 8 bytes; the smaller explicit size loses
        assert_eq!(s.size(), 8);

        let s = Type::structure(&[Type::int(), Type::int()]);
        s.set_size_and_alignment(32, -1);
        assert_eq!(s.size(), 32);
    }

    #[test]
    fn test_explicit_offset_is_kept() {
        let s = Type::structure(&[Type::int(), Type::int()]);
        s.set_offset(1, 16);
        assert_eq!(s.offset(0), 0);
        assert_eq!(s.offset(1), 16);
        assert_eq!(s.size(), 20);
    }

    #[test]
    fn test_relayout_after_mutation() {
        let s = Type::structure(&[Type::sbyte(), Type::int()]);
        assert_eq!(s.size(), 8);
        s.set_offset(1, 8);
        assert_eq!(s.offset(1), 8);
        assert_eq!(s.size(), 12);
    }

    #[test]
    fn test_signature_accessors() {
        let sig = Type::signature(Abi::Cdecl, Type::int(), &[Type::int(), Type::float64()]);
        assert!(sig.is_signature());
        assert_eq!(sig.num_params(), 2);
        assert!(sig.param(0).unwrap().ptr_eq(&Type::int()));
        assert!(sig.param(1).unwrap().ptr_eq(&Type::float64()));
        assert!(sig.param(2).is_none());
        assert!(sig.return_type().unwrap().ptr_eq(&Type::int()));
        assert_eq!(sig.abi(), Abi::Cdecl);
        // as a value, a signature is a function pointer
        assert_eq!(sig.size(), host::POINTER_SIZE);
    }

    #[test]
    fn test_names() {
        let s = Type::structure(&[Type::int(), Type::int()]);
        s.set_names(&["x", "y"]);
        assert_eq!(s.name(0).as_deref(), Some("x"));
        assert_eq!(s.find_name("y"), Some(1));
        assert_eq!(s.find_name("z"), None);
    }

    #[test]
    fn test_tagged_preserves_layout() {
        let t = Type::tagged(&Type::int(), 7, Some(Arc::new("enum".to_string())));
        assert_eq!(t.size(), 4);
        assert_eq!(t.alignment(), 4);
        assert_eq!(t.tagged_kind(), Some(7));
        let data = t.tagged_data().unwrap();
        assert_eq!(data.downcast_ref::<String>().unwrap(), "enum");
        assert!(t.tagged_type().unwrap().ptr_eq(&Type::int()));
    }

    #[test]
    fn test_normalize() {
        let tagged = Type::tagged(&Type::short(), 1, None);
        assert!(tagged.normalize().ptr_eq(&Type::short()));
        let expect = if host::POINTER_SIZE == 4 {
            Type::int()
        } else {
            Type::long()
        };
        assert!(Type::nint().normalize().ptr_eq(&expect));
        assert!(Type::void_ptr().normalize().ptr_eq(&expect));
        assert!(Type::nfloat().normalize().ptr_eq(&Type::float64()));
    }

    #[test]
    fn test_promote_int() {
        assert!(Type::sbyte().promote_int().ptr_eq(&Type::int()));
        assert!(Type::ushort().promote_int().ptr_eq(&Type::int()));
        assert!(Type::long().promote_int().ptr_eq(&Type::long()));
    }

    #[test]
    fn test_return_via_pointer() {
        let small = Type::structure(&[Type::int(), Type::int()]);
        assert!(!small.return_via_pointer());
        let large = Type::structure(&[Type::long(), Type::long(), Type::long()]);
        assert!(large.return_via_pointer());
        assert!(!Type::int().return_via_pointer());
    }

    #[test]
    fn test_setters_ignore_fixed_types() {
        let int = Type::int();
        int.set_size_and_alignment(64, 64);
        assert_eq!(int.size(), 4);
    }
}
