//! # Groups Command Implementation
//!
//! This module implements the `groups` subcommand, which lists the groups in
//! `groups.yml`. With `--tree` it also shows the components of each group as
//! a hierarchy.

use std::borrow::Cow;
use std::io;

use anyhow::Result;
use clap::Args;
use ptree::{print_tree, TreeItem};

use eil::group::Group;

use super::Context;

/// List component groups
#[derive(Args, Debug)]
pub struct GroupsArgs {
    /// Show the components of each group as a tree.
    #[arg(long)]
    pub tree: bool,
}

/// Execute the `groups` command.
pub fn execute(args: GroupsArgs, ctx: &Context) -> Result<()> {
    let groups = Group::all(&ctx.repo).map_err(|e| ctx.explain(e))?;

    if groups.is_empty() {
        println!("No groups found.");
        return Ok(());
    }

    if !args.tree {
        for group in &groups {
            println!("{}: {}", group.name, group.description);
        }
        return Ok(());
    }

    let tree = build_tree(&groups, ctx)?;
    print_tree(&tree).map_err(|e| anyhow::anyhow!("Failed to display tree: {}", e))?;

    Ok(())
}

fn build_tree(groups: &[Group], ctx: &Context) -> Result<TreeNode> {
    let mut children = Vec::with_capacity(groups.len());
    for group in groups {
        let members = group
            .components(&ctx.repo)
            .map_err(|e| ctx.explain(e))?
            .iter()
            .map(|c| TreeNode::leaf(c.name().to_string()))
            .collect();
        children.push(TreeNode {
            label: format!("{} ({})", group.name, group.description),
            children: members,
        });
    }

    Ok(TreeNode {
        label: "groups".to_string(),
        children,
    })
}

/// Tree node structure for ptree visualization
#[derive(Clone)]
struct TreeNode {
    label: String,
    children: Vec<TreeNode>,
}

impl TreeNode {
    fn leaf(label: String) -> Self {
        Self {
            label,
            children: vec![],
        }
    }
}

impl TreeItem for TreeNode {
    type Child = TreeNode;

    fn write_self<W: io::Write>(&self, f: &mut W, _style: &ptree::Style) -> io::Result<()> {
        write!(f, "{}", self.label)
    }

    fn children(&self) -> Cow<'_, [Self::Child]> {
        Cow::Borrowed(&self.children)
    }
}
