// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Simulation entities, joint wrenches and contacts.

use super::tables::{entity_type_to_ign, entity_type_to_ros};
use super::{convert_from, convert_into, convert_seq, Context, Convert};
use crate::core::Diagnostic;
use crate::msgs::ign::entity;
use crate::msgs::{ign, ros};

impl Convert<ign::Entity> for ros::Entity {
    fn convert(&self, dst: &mut ign::Entity, cx: &mut Context) {
        dst.id = self.id;
        dst.name = self.name.clone();
        match entity_type_to_ign(self.r#type) {
            Some(kind) => dst.r#type = kind as i32,
            None => {
                dst.r#type = entity::Type::default() as i32;
                cx.report(Diagnostic::unsupported_enum("entity.type", self.r#type, &["type"]));
            }
        }
    }
}

impl Convert<ros::Entity> for ign::Entity {
    fn convert(&self, dst: &mut ros::Entity, cx: &mut Context) {
        dst.id = self.id;
        dst.name = self.name.clone();
        match entity::Type::try_from(self.r#type) {
            Ok(kind) => dst.r#type = entity_type_to_ros(kind),
            Err(_) => {
                dst.r#type = ros::Entity::NONE;
                cx.report(Diagnostic::unsupported_enum("entity.type", self.r#type, &["type"]));
            }
        }
    }
}

impl Convert<ign::JointWrench> for ros::JointWrench {
    fn convert(&self, dst: &mut ign::JointWrench, cx: &mut Context) {
        self.header.convert(&mut dst.header, cx);
        dst.body_1_name = self.body_1_name.data.clone();
        dst.body_2_name = self.body_2_name.data.clone();
        dst.body_1_id = self.body_1_id.data;
        dst.body_2_id = self.body_2_id.data;
        convert_into(&self.body_1_wrench, &mut dst.body_1_wrench, cx);
        convert_into(&self.body_2_wrench, &mut dst.body_2_wrench, cx);
    }
}

impl Convert<ros::JointWrench> for ign::JointWrench {
    fn convert(&self, dst: &mut ros::JointWrench, cx: &mut Context) {
        self.header.convert(&mut dst.header, cx);
        dst.body_1_name.data = self.body_1_name.clone();
        dst.body_2_name.data = self.body_2_name.clone();
        dst.body_1_id.data = self.body_1_id;
        dst.body_2_id.data = self.body_2_id;
        convert_from(&self.body_1_wrench, &mut dst.body_1_wrench, cx);
        convert_from(&self.body_2_wrench, &mut dst.body_2_wrench, cx);
    }
}

/// Positions, normals, depths and wrenches are copied independently; their
/// lengths are not reconciled.
impl Convert<ign::Contact> for ros::Contact {
    fn convert(&self, dst: &mut ign::Contact, cx: &mut Context) {
        convert_into(&self.collision1, &mut dst.collision1, cx);
        convert_into(&self.collision2, &mut dst.collision2, cx);
        convert_seq(&self.positions, &mut dst.position, cx);
        convert_seq(&self.normals, &mut dst.normal, cx);
        dst.depth.clone_from(&self.depths);
        convert_seq(&self.wrenches, &mut dst.wrench, cx);
    }
}

impl Convert<ros::Contact> for ign::Contact {
    fn convert(&self, dst: &mut ros::Contact, cx: &mut Context) {
        convert_from(&self.collision1, &mut dst.collision1, cx);
        convert_from(&self.collision2, &mut dst.collision2, cx);
        convert_seq(&self.position, &mut dst.positions, cx);
        convert_seq(&self.normal, &mut dst.normals, cx);
        dst.depths.clone_from(&self.depth);
        convert_seq(&self.wrench, &mut dst.wrenches, cx);
    }
}

impl Convert<ign::Contacts> for ros::Contacts {
    fn convert(&self, dst: &mut ign::Contacts, cx: &mut Context) {
        self.header.convert(&mut dst.header, cx);
        convert_seq(&self.contacts, &mut dst.contact, cx);
    }
}

impl Convert<ros::Contacts> for ign::Contacts {
    fn convert(&self, dst: &mut ros::Contacts, cx: &mut Context) {
        self.header.convert(&mut dst.header, cx);
        convert_seq(&self.contact, &mut dst.contacts, cx);
    }
}
