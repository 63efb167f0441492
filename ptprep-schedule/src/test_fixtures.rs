//! small MATSim feeds shared by unit tests

pub const METRO_SCHEDULE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE transitSchedule SYSTEM "http://www.matsim.org/files/dtd/transitSchedule_v2.dtd">
<transitSchedule>
	<attributes>
		<attribute name="source" class="java.lang.String">metro gtfs</attribute>
	</attributes>
	<transitStops>
		<stopFacility id="BL01" x="302154.5" y="2770105.25" linkRefId="pt_BL01" name="Dingpu" isBlocking="true">
			<attributes>
				<attribute name="gtfs_stop_id" class="java.lang.String">BL01</attribute>
			</attributes>
		</stopFacility>
		<stopFacility id="BL02" x="302900" y="2770600" linkRefId="pt_BL02" name="Yongning" stopAreaId="yongning"/>
		<stopFacility id="BL03" x="303700" y="2771200" name="Tucheng" isBlocking="false"/>
	</transitStops>
	<minimalTransferTimes>
		<relation fromStop="BL01" toStop="BL02" transferTime="120"/>
	</minimalTransferTimes>
	<transitLine id="BL" name="Bannan">
		<transitRoute id="BL_east">
			<description>Bannan line eastbound</description>
			<transportMode>subway</transportMode>
			<routeProfile>
				<stop refId="BL01" departureOffset="00:00:00"/>
				<stop refId="BL02" arrivalOffset="00:02:00" departureOffset="00:02:30" awaitDeparture="true"/>
				<stop refId="BL03" arrivalOffset="00:05:00" allowBoarding="false"/>
			</routeProfile>
			<route>
				<link refId="pt_BL01"/>
				<link refId="BL01_BL02"/>
				<link refId="BL02_BL03"/>
			</route>
			<departures>
				<departure id="dep_1" departureTime="06:00:00" vehicleRefId="train_1"/>
				<departure id="dep_2" departureTime="06:10:00" vehicleRefId="ghost_train"/>
				<departure id="dep_3" departureTime="25:30:00">
					<attributes>
						<attribute name="note" class="java.lang.String">after midnight</attribute>
					</attributes>
				</departure>
			</departures>
		</transitRoute>
	</transitLine>
</transitSchedule>
"#;

pub const METRO_VEHICLES: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<vehicleDefinitions xmlns="http://www.matsim.org/files/dtd" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:schemaLocation="http://www.matsim.org/files/dtd http://www.matsim.org/files/dtd/vehicleDefinitions_v2.0.xsd">
	<vehicle id="train_2" type="metro_6car"/>
	<vehicleType id="metro_6car">
		<attributes>
			<attribute name="accessTimeInSecondsPerPerson" class="java.lang.Double">0.5</attribute>
		</attributes>
		<description>six car metro set</description>
		<capacity seats="300" standingRoomInPersons="1500"/>
		<length meter="120.0"/>
		<width meter="3.1"/>
		<maximumVelocity meterPerSecond="22.2"/>
		<engineInformation>
			<attributes>
				<attribute name="HbefaTechnology" class="java.lang.String">electricity</attribute>
			</attributes>
		</engineInformation>
		<passengerCarEquivalents pce="0.0"/>
		<networkMode networkMode="subway"/>
	</vehicleType>
	<vehicle id="train_1" type="metro_6car"/>
</vehicleDefinitions>
"#;

/// shares stop `BL01` and line `BL` with the metro feed, and has a transfer
/// to a stop it does not define
pub const BUS_SCHEDULE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<transitSchedule>
	<transitStops>
		<stopFacility id="BL01" x="302160" y="2770110" name="Dingpu Station" stopAreaId="yongning"/>
		<stopFacility id="S2" x="302500" y="2770400" linkRefId="bus_S2"/>
	</transitStops>
	<minimalTransferTimes>
		<relation fromStop="BL01" toStop="S2" transferTime="60"/>
		<relation fromStop="S2" toStop="nowhere" transferTime="90"/>
	</minimalTransferTimes>
	<transitLine id="BL">
		<transitRoute id="r1">
			<transportMode>bus</transportMode>
			<routeProfile>
				<stop refId="BL01" departureOffset="00:00:00"/>
				<stop refId="S2" arrivalOffset="00:04:00"/>
			</routeProfile>
			<departures>
				<departure id="dep_1" departureTime="07:00:00" vehicleRefId="bus_1"/>
			</departures>
		</transitRoute>
	</transitLine>
</transitSchedule>
"#;

pub const BUS_VEHICLES: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<vehicleDefinitions xmlns="http://www.matsim.org/files/dtd">
	<vehicleType id="default">
		<capacity seats="40" standingRoomInPersons="30"/>
		<length meter="12.0"/>
	</vehicleType>
	<vehicle id="bus_1" type="default"/>
	<vehicle id="bus_2" type="default"/>
</vehicleDefinitions>
"#;
