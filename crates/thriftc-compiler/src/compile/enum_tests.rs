use thriftc_core::{Enum, EnumItem};

use crate::test_utils::{compile, compile_error, dump_compiled};

#[test]
fn implicit_values_follow_previous() {
    let status = Enum::new("Status")
        .item(EnumItem::new("OK"))
        .item(EnumItem::new("WARN"))
        .item(EnumItem::new("FAILED").value(10))
        .item(EnumItem::new("UNKNOWN"));

    insta::assert_snapshot!(dump_compiled(status), @r"
    enum Status
      OK = 0
      WARN = 1
      FAILED = 10
      UNKNOWN = 11
    ");
}

#[test]
fn empty_enum() {
    let spec = compile(Enum::new("Nothing")).unwrap();

    assert!(spec.as_enum().unwrap().items.is_empty());
}

#[test]
fn duplicate_item() {
    let status = Enum::new("Status")
        .item(EnumItem::new("OK").at(2))
        .item(EnumItem::new("OK").value(3).at(3));

    insta::assert_snapshot!(compile_error(status), @r#"cannot compile "Status": the name "OK" has already been used on line 2"#);
}

#[test]
fn duplicate_values_are_allowed() {
    let status = Enum::new("Status")
        .item(EnumItem::new("OK").value(1))
        .item(EnumItem::new("SUCCESS").value(1));

    let spec = compile(status).unwrap();
    let items = &spec.as_enum().unwrap().items;

    assert_eq!(items["OK"].value, items["SUCCESS"].value);
}
