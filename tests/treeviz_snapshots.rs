//! Treeviz rendering of sample expressions
//!
//! Uses inline snapshots so the expected drawing sits next to the test.

use exprviz::exprviz::formats::{to_treeviz_str, to_treeviz_str_with_options, TreevizOptions};
use exprviz::exprviz::testing::sample;
use exprviz::exprviz::{build, DisplayNode};

fn tree(name: &str) -> DisplayNode {
    build(&sample(name).expect("known sample"), None)
}

#[test]
fn test_lambda_treeviz() {
    insta::assert_snapshot!(to_treeviz_str(&tree("lambda")), @r###"
    λ LambdaExpression [bool] Parameters:
    ├─ ▢ ParameterExpression [int]: num1
    ├─ ▢ ParameterExpression [int]: num2
    └─ ± Body => BinaryExpression: [GreaterThan-bool]
      ├─ ± Left => BinaryExpression: [Add-int]
      │ ├─ ▢ Left => ParameterExpression [int]: num1
      │ └─ ▢ Right => ParameterExpression [int]: num2
      └─ ◆ Right => ConstantExpression [int]: 1000
    "###);
}

#[test]
fn test_switch_treeviz() {
    insta::assert_snapshot!(to_treeviz_str(&tree("switch")), @r###"
    ⋔ SwitchExpression [void]
    └─ ○ Case
      ├─ ◆ Value => ConstantExpression [int]: 1
      └─ ƒ Body => MethodCallExpression [WriteLine] Arguments:
        └─ ◆ ConstantExpression [string]: "Second"
    "###);
}

#[test]
fn test_try_finally_treeviz() {
    insta::assert_snapshot!(to_treeviz_str(&tree("try_finally")), @r###"
    ⚠ TryExpression [int]
    ├─ ◆ Try => ConstantExpression [int]: 3
    └─ ƒ Finally => MethodCallExpression [WriteLine] Arguments:
      └─ ◆ ConstantExpression [string]: "Second"
    "###);
}

#[test]
fn test_binary_with_literals() {
    let options = TreevizOptions {
        show_literal: true,
        ..Default::default()
    };
    insta::assert_snapshot!(to_treeviz_str_with_options(&tree("binary"), &options), @r###"
    ± BinaryExpression: [GreaterThan-bool]  ⟨(1 > 2)⟩
    ├─ ◆ Left => ConstantExpression [int]: 1  ⟨1⟩
    └─ ◆ Right => ConstantExpression [int]: 2  ⟨2⟩
    "###);
}

#[test]
fn test_label_width() {
    let options = TreevizOptions {
        max_label_width: 12,
        ..Default::default()
    };
    insta::assert_snapshot!(to_treeviz_str_with_options(&tree("goto"), &options), @r###"
    ↪ GotoExpressi...
    ├─ ○ Kind => Goto
    ├─ ○ Target => la...
    └─ ○ Value => nul...
    "###);
}

#[test]
fn test_depth_guard_in_treeviz() {
    use exprviz::exprviz::{BuildOptions, TreeBuilder};

    let builder = TreeBuilder::new(BuildOptions { max_depth: 2 });
    let tree = builder.build(&sample("lambda").expect("known sample"), None);
    insta::assert_snapshot!(to_treeviz_str(&tree), @r###"
    λ LambdaExpression [bool] Parameters:
    ├─ ▢ ParameterExpression [int]: num1
    ├─ ▢ ParameterExpression [int]: num2
    └─ ± Body => BinaryExpression: [GreaterThan-bool]
      ├─ ○ Left => Truncated Node [depth 2]: Binary
      └─ ○ Right => Truncated Node [depth 2]: Constant
    "###);
}
