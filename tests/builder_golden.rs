//! Golden display trees for every sample expression
//!
//! Each case checks the root label and the labels of its direct children, in order.

use exprviz::exprviz::testing::sample;
use exprviz::exprviz::{build, DisplayNode, ExpressionKind};
use rstest::rstest;

fn tree(name: &str) -> DisplayNode {
    let expression = sample(name).unwrap_or_else(|| panic!("unknown sample {name}"));
    build(&expression, None)
}

#[rstest]
#[case::binary(
    "binary",
    "BinaryExpression: [GreaterThan-bool]",
    &["Left => ConstantExpression [int]: 1", "Right => ConstantExpression [int]: 2"]
)]
#[case::conditional(
    "conditional",
    "ConditionalExpression: [string]",
    &[
        "Test => ConstantExpression [bool]: True",
        "IfTrue => ConstantExpression [string]: \"yes\"",
        "IfFalse => ConstantExpression [string]: \"no\"",
    ]
)]
#[case::debug_info(
    "debug_info",
    "DebugInfoExpression:",
    &[
        "FileName: debug",
        "Language: 00000000-0000-0000-0000-000000000000",
        "LanguageVendor: 00000000-0000-0000-0000-000000000000",
        "DocumentType: 00000000-0000-0000-0000-000000000000",
        "StartLine: 1",
        "StartColumn: 2",
        "EndLine: 3",
        "EndColumn: 4",
    ]
)]
#[case::defaults(
    "defaults",
    "BlockExpression Expressions:",
    &[
        "DefaultExpression: [interface-IEnumerable<int>]",
        "DefaultExpression: [delegate-Func<int>]",
        "DefaultExpression: [class-Program]",
        "DefaultExpression: [struct-int]",
        "DefaultExpression: [struct-DayOfWeek]",
    ]
)]
#[case::dynamic(
    "dynamic",
    "DynamicExpression [Func<CallSite, object, object>] Arguments:",
    &["ParameterExpression [object]: o"]
)]
#[case::goto(
    "goto",
    "GotoExpression: [void]",
    &["Kind => Goto", "Target => label", "Value => null"]
)]
#[case::goto_return(
    "return",
    "GotoExpression: [long]",
    &["Kind => Return", "Target => UnnamedLabel", "Value => ConstantExpression [int]: 1"]
)]
#[case::index_vector(
    "index_vector",
    "IndexExpression [] Arguments:",
    &["ConstantExpression [int]: 2", "Object => ConstantExpression [int[]]: { 0, 1, 2, 3, }"]
)]
#[case::index_matrix(
    "index_matrix",
    "IndexExpression [] Arguments:",
    &[
        "ConstantExpression [int]: 1",
        "ConstantExpression [int]: 3",
        "Object => ConstantExpression [int[,]]: { { 0, 1, 2, 3, }, { 10, 11, 12, 13, }, }",
    ]
)]
#[case::index_param(
    "index_param",
    "IndexExpression [] Arguments:",
    &["ParameterExpression [int]: Index", "Object => ParameterExpression [int[]]: Array"]
)]
#[case::invocation(
    "invocation",
    "InvocationExpression [(num1, num2) => ((num1 + num2) > 1000)] Arguments:",
    &[
        "ConstantExpression [int]: 10",
        "ConstantExpression [int]: 20",
        "Expression => LambdaExpression [bool] Parameters:",
    ]
)]
#[case::label(
    "label",
    "LabelExpression [void]",
    &["Target => label", "DefaultValue => null"]
)]
#[case::label_default(
    "label_default",
    "LabelExpression [string]",
    &["Target => labelType", "DefaultValue => ConstantExpression [string]: \"str\""]
)]
#[case::lambda(
    "lambda",
    "LambdaExpression [bool] Parameters:",
    &[
        "ParameterExpression [int]: num1",
        "ParameterExpression [int]: num2",
        "Body => BinaryExpression: [GreaterThan-bool]",
    ]
)]
#[case::list_init("list_init", "ListInitExpression", &["NewExpression Arguments:"])]
#[case::loop_body("loop", "LoopExpression", &["Body => ConstantExpression [int]: 1"])]
#[case::member("member", "MemberExpression [string]: Name", &[])]
#[case::member_init(
    "member_init",
    "MemberInitExpression [Car]:",
    &["Weight = weight", "Height = height"]
)]
#[case::method_call(
    "method_call",
    "MethodCallExpression [Write] Arguments:",
    &["ConstantExpression [string]: \"Hello\""]
)]
#[case::new_array(
    "new_array",
    "NewArrayExpression [string[]]",
    &[
        "ConstantExpression [string]: \"oak\"",
        "ConstantExpression [string]: \"fir\"",
        "ConstantExpression [string]: \"spruce\"",
        "ConstantExpression [string]: \"alder\"",
    ]
)]
#[case::new_object("new", "NewExpression Arguments:", &[])]
#[case::new_anonymous(
    "new_anonymous",
    "NewExpression Arguments:",
    &["Name => ConstantExpression [string]: \"C#\"", "IsSelected => ConstantExpression [bool]: True"]
)]
#[case::parameter("parameter", "ParameterExpression [int]: a", &[])]
#[case::runtime_variables(
    "runtime_variables",
    "RuntimeVariablesExpression [IRuntimeVariables]",
    &["ParameterExpression [int]: x", "ParameterExpression [string]: name"]
)]
#[case::switch("switch", "SwitchExpression [void]", &["Case"])]
#[case::try_finally(
    "try_finally",
    "TryExpression [int]",
    &["Try => ConstantExpression [int]: 3", "Finally => MethodCallExpression [WriteLine] Arguments:"]
)]
#[case::try_catch(
    "try_catch",
    "TryExpression [int]",
    &["Try => ConstantExpression [int]: 3", "Catch", "Catch", "Finally => null"]
)]
#[case::type_binary(
    "type_binary",
    "TypeBinaryExpression [int] Operand:",
    &["ConstantExpression [int]: 3"]
)]
#[case::unary(
    "unary",
    "UnaryExpression [Convert-long] Operand:",
    &["ConstantExpression [int]: 2"]
)]
fn test_sample_tree(#[case] name: &str, #[case] label: &str, #[case] children: &[&str]) {
    let tree = tree(name);
    assert_eq!(tree.label, label);
    assert_eq!(tree.child_labels(), children);
}

#[test]
fn test_constant_literals() {
    let tree = tree("constants");
    assert_eq!(
        tree.child_labels(),
        vec![
            "ConstantExpression [Nullable<int>]: null",
            "ConstantExpression [string]: null",
            "ConstantExpression [string]: \"null\"",
            "ConstantExpression [string]: \"str\"",
            "ConstantExpression [string]: \" \"",
            "ConstantExpression [string]: \"\t\"",
            "ConstantExpression [char]: ' '",
            "ConstantExpression [char]: '\t'",
            "ConstantExpression [float]: 1.5",
            "ConstantExpression [int[][,]]: { null, { { 1, 11, }, { 2, 22, }, }, }",
            "ConstantExpression [Program[][,][][,,][][,,,][][,,,,]]: { null, null, null, null, null, null, }",
            "ConstantExpression [int[]]: { 0, 1, }",
            "ConstantExpression [string[]]: { null, \"null\", \" \", }",
            "ConstantExpression [int[,]]: { { 1, 11, 111, }, { 2, 22, 222, }, }",
            "ConstantExpression [int[,,]]: { { { 1, 11, }, { 2, 22, }, }, { { 3, 33, }, { 4, 44, }, }, }",
            "ConstantExpression [int[,,,]]: { { { { 1, 11, }, { 2, 22, }, }, { { 3, 33, }, { 4, 44, }, }, }, { { { 5, 55, }, { 6, 66, }, }, { { 7, 77, }, { 8, 88, }, }, }, }",
        ]
    );
    for child in &tree.children {
        assert!(child.label.ends_with(child.literal_text.as_deref().unwrap_or("?")));
    }
}

#[test]
fn test_switch_case_children() {
    let tree = tree("switch");
    assert_eq!(
        tree.children[0].child_labels(),
        vec![
            "Value => ConstantExpression [int]: 1",
            "Body => MethodCallExpression [WriteLine] Arguments:",
        ]
    );
    assert_eq!(tree.children[0].node_type, None);
}

#[test]
fn test_catch_filter_is_null_checked() {
    let tree = tree("try_catch");
    assert_eq!(
        tree.children[1].child_labels(),
        vec!["Filter => ConstantExpression [bool]: True", "Body => ConstantExpression [int]: 0"]
    );
    assert_eq!(
        tree.children[2].child_labels(),
        vec!["Filter => null", "Body => ConstantExpression [int]: -1"]
    );
}

#[test]
fn test_list_init_wraps_new_object() {
    let tree = tree("list_init");
    let new_object = &tree.children[0];
    assert_eq!(new_object.node_type, Some(ExpressionKind::New));
    assert_eq!(
        new_object.literal_text.as_deref(),
        Some("new Dictionary`2()")
    );
}

#[test]
fn test_runtime_variables_lists_each_variable() {
    let tree = tree("runtime_variables");
    assert_eq!(tree.literal_text.as_deref(), Some("(x, name)"));
    for child in &tree.children {
        assert_eq!(child.node_type, Some(ExpressionKind::Parameter));
        assert!(child.is_leaf());
    }
    assert_eq!(tree.children[1].literal_text.as_deref(), Some("name"));
}

#[test]
fn test_literal_text_defaults_to_expression_text() {
    let tree = tree("lambda");
    assert_eq!(
        tree.literal_text.as_deref(),
        Some("(num1, num2) => ((num1 + num2) > 1000)")
    );
    assert_eq!(tree.children[0].literal_text.as_deref(), Some("num1"));
    let placeholder = &crate::tree("goto").children[2];
    assert_eq!(placeholder.literal_text, None);
}

#[test]
fn test_build_is_idempotent() {
    let expression = sample("all").expect("all sample");
    assert_eq!(build(&expression, None), build(&expression, None));
}

#[test]
fn test_every_node_of_all_is_tagged_or_synthesized() {
    let tree = tree("all");
    for node in tree.iter() {
        if node.node_type.is_none() {
            assert!(node.literal_text.is_none(), "{}", node.label);
        } else {
            assert!(node.literal_text.is_some(), "{}", node.label);
        }
    }
}
