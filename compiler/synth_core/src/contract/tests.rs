use super::*;

#[test]
fn index_matches_all_order() {
    for (i, member) in ContractMember::ALL.iter().enumerate() {
        assert_eq!(member.index(), i);
    }
}

#[test]
fn raw_shapes() {
    assert_eq!(ContractMember::ToString.return_kind(), RawKind::Str);
    assert!(ContractMember::ToString.param_kinds().is_empty());
    assert_eq!(ContractMember::HashCode.return_kind(), RawKind::Int);
    assert!(ContractMember::HashCode.param_kinds().is_empty());
    assert_eq!(ContractMember::Equals.return_kind(), RawKind::Bool);
    assert_eq!(ContractMember::Equals.param_kinds(), &[RawKind::Any]);
}

#[test]
fn method_names() {
    assert_eq!(ContractMember::ToString.method_name(), "to_string");
    assert_eq!(ContractMember::HashCode.method_name(), "hash_code");
    assert_eq!(ContractMember::Equals.method_name(), "equals");
}
