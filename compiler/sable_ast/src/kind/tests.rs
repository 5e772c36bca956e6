use super::*;
use pretty_assertions::assert_eq;
use sable_ir::StringInterner;

#[test]
fn category_of_each_variant() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    assert_eq!(NodeKind::from(UnqualifiedType::Bool).category(), Category::Type);
    assert_eq!(
        NodeKind::from(QualifiedType::new(Qualifiers::CONST)).category(),
        Category::QualifiedType
    );
    assert_eq!(NodeKind::from(Ctor::Null).category(), Category::Ctor);
    assert_eq!(NodeKind::from(Expression::Void).category(), Category::Expression);
    assert_eq!(NodeKind::from(Statement::Yield).category(), Category::Statement);
    assert_eq!(
        NodeKind::from(Declaration::Field { id: x }).category(),
        Category::Declaration
    );
}

#[test]
fn variant_names_are_qualified_by_category() {
    assert_eq!(
        NodeKind::from(UnqualifiedType::UnsignedInteger { width: 32 }).variant_name(),
        "type::UnsignedInteger"
    );
    assert_eq!(NodeKind::from(Statement::Break).variant_name(), "statement::Break");
    assert_eq!(
        NodeKind::from(Expression::Keyword(Keyword::SelfRef)).variant_name(),
        "expression::Keyword"
    );
    assert_eq!(Category::QualifiedType.to_string(), "qualified-type");
}

#[test]
fn allocable_and_sortable_tables() {
    use UnqualifiedType as T;

    let allocable = [
        T::Address,
        T::Bool,
        T::Interval,
        T::Network,
        T::Port,
        T::Real,
        T::RegExp,
        T::String,
        T::Time,
        T::SignedInteger { width: 8 },
        T::UnsignedInteger { width: 64 },
        T::Tuple,
        T::Struct,
        T::Optional,
        T::Vector,
    ];
    for ty in allocable {
        assert!(ty.is_allocable(), "{ty:?} should be allocable");
    }
    for ty in [T::Any, T::Null, T::Void, T::Unknown, T::Function, T::OperandList, T::Error] {
        assert!(!ty.is_allocable(), "{ty:?} should not be allocable");
    }

    assert!(T::Tuple.is_sortable());
    assert!(T::Time.is_sortable());
    assert!(!T::RegExp.is_sortable());
    assert!(!T::Struct.is_sortable());
    assert!(!T::Vector.is_sortable());
}

#[test]
fn placeholders() {
    let interner = StringInterner::new();
    assert!(UnqualifiedType::Unknown.is_placeholder());
    assert!(UnqualifiedType::Name {
        id: interner.intern("Foo")
    }
    .is_placeholder());
    assert!(!UnqualifiedType::Any.is_placeholder());
    assert!(!UnqualifiedType::Error.is_placeholder());
}

#[test]
fn integer_widths() {
    for width in INTEGER_WIDTHS {
        assert!(is_valid_integer_width(width));
    }
    assert!(!is_valid_integer_width(0));
    assert!(!is_valid_integer_width(24));
    assert!(!is_valid_integer_width(128));
    assert_eq!(
        UnqualifiedType::SignedInteger { width: 16 }.integer_width(),
        Some(16)
    );
    assert_eq!(UnqualifiedType::Bool.integer_width(), None);
}

#[test]
fn qualifiers() {
    let qt = QualifiedType::new(Constness::Const.into());
    assert!(qt.is_const());
    assert!(!qt.is_inferred());

    let mutable = QualifiedType::new(Constness::Mutable.into());
    assert!(!mutable.is_const());
    assert_ne!(qt, mutable);

    let inferred = QualifiedType::new(Qualifiers::INFERRED);
    assert!(inferred.is_inferred());
}

#[test]
fn real_ctor_keeps_bit_pattern() {
    let ctor = Ctor::real(-0.0);
    assert_ne!(ctor, Ctor::real(0.0));
    assert_eq!(ctor.real_value().map(f64::to_bits), Some((-0.0f64).to_bits()));
    assert_eq!(Ctor::Null.real_value(), None);
}

#[test]
fn keyword_spelling() {
    assert_eq!(Keyword::SelfRef.spelling(), "self");
    assert_eq!(Keyword::DollarDollar.spelling(), "$$");
    assert_eq!(Keyword::Captures.spelling(), "$@");
}

#[test]
fn declaration_ids() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    assert_eq!(Declaration::Constant { id: x }.id(), Some(x));
    assert_eq!(
        Declaration::Parameter {
            id: x,
            kind: ParameterKind::InOut
        }
        .id(),
        Some(x)
    );
    assert_eq!(Declaration::TupleElement { id: None }.id(), None);
}
