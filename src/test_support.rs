use crate::session::EditSession;
use crate::tree::Document;
use crate::xml;

/// A config document used across tests.
///
/// Indexable keys:
/// - `main:config/limits/maxSpeed`   = "100" (INT)
/// - `main:config/limits/minSpeed`   = "10"  (INT)
/// - `main:config/network/dhcp`      = "true" (BOOL)
/// - `main:config/network/advanced/mtu` = "1500" (INT)
/// - `feeder:config/belt/startDelay` = "250" (TIME)
pub(crate) const SAMPLE_XML: &str = r#"<DATA>
    <Element Name="main:config">
        <Group ID="limits">
            <Property ID="maxSpeed" DataType="INT" Value="100"/>
            <Property ID="minSpeed" DataType="INT" Value="10"/>
        </Group>
        <Group ID="network">
            <Property ID="dhcp" DataType="BOOL" Value="true"/>
            <Group ID="advanced">
                <Property ID="mtu" DataType="INT" Value="1500"/>
            </Group>
        </Group>
    </Element>
    <Element Name="feeder:config">
        <Group ID="belt">
            <Property ID="startDelay" DataType="TIME" Value="250"/>
        </Group>
    </Element>
</DATA>"#;

/// A partial template for [`SAMPLE_XML`].
///
/// Differs from the config on `maxSpeed` (150), `minSpeed` (5), `dhcp`
/// (false), and `startDelay` (300); has no counterpart for
/// `main:config/network/advanced/mtu`; and carries one key the config
/// lacks (`main:config/limits/turbo`), which merges must never inject.
pub(crate) const TEMPLATE_XML: &str = r#"<DATA>
    <Element Name="main:config">
        <Group ID="limits">
            <Property ID="maxSpeed" DataType="INT" Value="150"/>
            <Property ID="minSpeed" DataType="INT" Value="5"/>
            <Property ID="turbo" DataType="BOOL" Value="true"/>
        </Group>
        <Group ID="network">
            <Property ID="dhcp" DataType="BOOL" Value="false"/>
        </Group>
    </Element>
    <Element Name="feeder:config">
        <Group ID="belt">
            <Property ID="startDelay" DataType="TIME" Value="300"/>
        </Group>
    </Element>
</DATA>"#;

pub(crate) fn sample_document() -> Document {
    xml::parse(SAMPLE_XML).unwrap()
}

pub(crate) fn template_document() -> Document {
    xml::parse(TEMPLATE_XML).unwrap()
}

pub(crate) fn sample_session_with_template() -> EditSession {
    let mut session = EditSession::load(SAMPLE_XML).unwrap();
    session.load_template(TEMPLATE_XML).unwrap();
    session
}
