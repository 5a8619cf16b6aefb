// Dweve ZCONF - Monitoring Configuration Expression Toolkit
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Item key and expression samples with expected results.

/// Valid item keys as `(text, id, parameter count)`.
pub fn item_keys() -> Vec<(&'static str, &'static str, usize)> {
    vec![
        ("agent.ping", "agent.ping", 0),
        ("net.tcp.service[ntp,,1]", "net.tcp.service", 3),
        (r#"key["a,b"]"#, "key", 1),
        ("key[[a,b],c]", "key", 2),
        ("key[a,b,]", "key", 3),
        ("key[[[[a]]]]", "key", 1),
        ("key[]", "key", 1),
        ("vfs.fs.size[/,pfree]", "vfs.fs.size", 2),
        (r#"web.page.get["http://example.com/?a=1,2", ,80]"#, "web.page.get", 3),
        (r#"log[/var/log/app.log,"error \"fatal\"",,100,skip]"#, "log", 5),
        ("system.run[ls -la /tmp]", "system.run", 1),
    ]
}

/// Item key migrations as `(start stage, input, expected)`.
pub fn key_migrations() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        ("1.0", "ftp", "net.tcp.service[ftp]"),
        ("1.0", "ftp,21", "net.tcp.service[ftp,,21]"),
        ("1.0", "http_perf", "net.tcp.service.perf[http]"),
        ("1.0", "smtp_perf,25", "net.tcp.service.perf[smtp,,25]"),
        ("1.0", "tcp,{$PORT}", "net.tcp.service[tcp,,{$PORT}]"),
        ("1.0", "ntp", "net.udp.service[ntp]"),
        ("1.0", "net.tcp.service[ntp]", "net.udp.service[ntp]"),
        ("1.0", "net.tcp.service.perf[ntp,,123]", "net.udp.service.perf[ntp,,123]"),
        ("1.0", "myitem", "myitem"),
        ("1.0", "system.cpu.load[all,avg1]", "system.cpu.load[all,avg1]"),
        ("2.0", "ftp,21", "ftp,21"),
        ("2.0", "net.tcp.service[ntp]", "net.tcp.service[ntp]"),
    ]
}

/// Trigger expression migrations as `(start stage, input, expected)`.
pub fn expression_migrations() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        (
            "1.0",
            "{server:ftp,21.last(0)}=0",
            "{server:net.tcp.service[ftp,,21].last(0)}=0",
        ),
        (
            "1.0",
            "{{HOSTNAME}:agent.ping.nodata(300)}=1",
            "{{HOST.HOST}:agent.ping.nodata(300)}=1",
        ),
        (
            "1.0",
            "{a:ntp.last(0)}#0&{b:ssh.last(0)}#0",
            "{a:net.udp.service[ntp].last(0)}<>0 and {b:net.tcp.service[ssh].last(0)}<>0",
        ),
        (
            "2.0",
            "{h:k.last(0)}=1|{h:k.last(0)}=2",
            "{h:k.last(0)}=1 or {h:k.last(0)}=2",
        ),
        (
            "2.0",
            r#"{h:log.regexp("a|b")}=1&{$M}#{#LLD}"#,
            r#"{h:log.regexp("a|b")}=1 and {$M}<>{#LLD}"#,
        ),
        (
            "2.0",
            "{{HOSTNAME}:ftp.last(0)}#0",
            "{{HOSTNAME}:ftp.last(0)}<>0",
        ),
        ("2.0", "({h:k.last(0)}=1)|({h:k.min(5)}>2)", "({h:k.last(0)}=1) or ({h:k.min(5)}>2)"),
    ]
}
