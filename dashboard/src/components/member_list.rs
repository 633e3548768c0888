use leptos::prelude::*;

use crate::net::types::MemberGroupInfo;

/// Member groups (Agents, DBServers, ...) of one deployment, one table
/// per group. Groups arrive pre-sorted from the server.
#[component]
pub fn MemberList(groups: Vec<MemberGroupInfo>) -> impl IntoView {
    view! {
        {groups
            .into_iter()
            .map(|group| {
                let title = group.group;
                let members = group.members;
                view! {
                    <section class="member-group">
                        <h3>{title}</h3>
                        <table class="list">
                            <thead>
                                <tr>
                                    <th>"ID"</th>
                                    <th>"Pod"</th>
                                    <th>"PVC"</th>
                                    <th>"PV"</th>
                                    <th>"Cluster member"</th>
                                    <th>"Ready"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {members
                                    .into_iter()
                                    .map(|member| {
                                        view! {
                                            <tr>
                                                <td><code>{member.id}</code></td>
                                                <td>{member.pod_name}</td>
                                                <td>{member.pvc_name}</td>
                                                <td>{member.pv_name}</td>
                                                <td>{member.member_of_cluster.label()}</td>
                                                <td>{if member.ready { "yes" } else { "no" }}</td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </tbody>
                        </table>
                    </section>
                }
            })
            .collect::<Vec<_>>()}
    }
}
