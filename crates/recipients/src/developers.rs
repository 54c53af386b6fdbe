// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Committers of the current build's own changes.

use crate::committers::add_committers;
use crate::context::{EnvVars, PublisherContext};
use crate::provider::RecipientProvider;
use crate::recipients::RecipientSets;
use crate::resolve::Resolver;

/// Notifies the authors of the changes included in the current build.
#[derive(Debug, Clone)]
pub struct Developers<R> {
    resolver: R,
}

impl<R> Developers<R> {
    pub const SYMBOL: &'static str = "developers";
    pub const DISPLAY_NAME: &'static str = "Developers";

    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }
}

impl<R: Resolver> RecipientProvider for Developers<R> {
    fn symbol(&self) -> &'static str {
        Self::SYMBOL
    }

    fn display_name(&self) -> &'static str {
        Self::DISPLAY_NAME
    }

    fn add_recipients(
        &self,
        context: &PublisherContext<'_>,
        env: &EnvVars,
        recipients: &mut RecipientSets,
    ) {
        context.debug().send(format_args!("Sending email to developers."));
        add_committers(context.build(), &self.resolver, context, env, recipients);
    }
}
